//! Code point constants and classification for the input stream preprocessor.
//!
//! [§ 13.2.3.5 Preprocessing the input stream](https://html.spec.whatwg.org/multipage/parsing.html#preprocessing-the-input-stream)
//!
//! The preprocessor consults these pure functions to decide which code points
//! survive into the tokenizer and which are substituted with U+FFFD. Ranges
//! follow the [Infra standard](https://infra.spec.whatwg.org/#code-points)
//! definitions of surrogates, noncharacters, and controls.

/// U+FFFD REPLACEMENT CHARACTER, substituted for disallowed input.
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// U+FEFF BYTE ORDER MARK as a 16-bit code unit.
pub const BOM_CODE_UNIT: u16 = 0xFEFF;

/// U+000D CARRIAGE RETURN as a 16-bit code unit.
pub const CARRIAGE_RETURN: u16 = 0x000D;

/// U+000A LINE FEED as a 16-bit code unit.
pub const LINE_FEED: u16 = 0x000A;

/// [Infra: surrogate](https://infra.spec.whatwg.org/#surrogate)
///
/// "A surrogate is a leading surrogate or a trailing surrogate", i.e. a code
/// point in the range U+D800 to U+DFFF, inclusive. A surrogate only reaches
/// the tokenizer when it could not be paired.
#[must_use]
pub const fn is_surrogate(code_point: u32) -> bool {
    matches!(code_point, 0xD800..=0xDFFF)
}

/// [Infra: leading surrogate](https://infra.spec.whatwg.org/#leading-surrogate)
///
/// "A leading surrogate is a code point that is in the range U+D800 to
/// U+DBFF, inclusive."
#[must_use]
pub const fn is_leading_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

/// [Infra: trailing surrogate](https://infra.spec.whatwg.org/#trailing-surrogate)
///
/// "A trailing surrogate is a code point that is in the range U+DC00 to
/// U+DFFF, inclusive."
#[must_use]
pub const fn is_trailing_surrogate(unit: u16) -> bool {
    matches!(unit, 0xDC00..=0xDFFF)
}

/// True when two consecutive code units form a valid surrogate pair.
#[must_use]
pub const fn is_surrogate_pair(leading: u16, trailing: u16) -> bool {
    is_leading_surrogate(leading) && is_trailing_surrogate(trailing)
}

/// Combine a valid surrogate pair into the code point it encodes.
///
/// Callers must have checked `is_surrogate_pair` first.
#[must_use]
pub fn surrogate_pair_code_point(leading: u16, trailing: u16) -> u32 {
    0x1_0000 + (u32::from(leading) - 0xD800) * 0x400 + (u32::from(trailing) - 0xDC00)
}

/// [Infra: noncharacter](https://infra.spec.whatwg.org/#noncharacter)
///
/// "A noncharacter is a code point that is in the range U+FDD0 to U+FDEF,
/// inclusive, or U+FFFE, U+FFFF, U+1FFFE, U+1FFFF, ... U+10FFFE, or
/// U+10FFFF."
#[must_use]
pub const fn is_noncharacter(code_point: u32) -> bool {
    matches!(code_point, 0xFDD0..=0xFDEF) || (code_point & 0xFFFE) == 0xFFFE
}

/// Control characters that must not reach the tokenizer.
///
/// [§ 13.2.3.5](https://html.spec.whatwg.org/multipage/parsing.html#preprocessing-the-input-stream):
/// "Any occurrences of surrogates, noncharacters, and controls other than
/// ASCII whitespace and U+0000 NULL characters are parse errors."
///
/// The allow-list is therefore U+0000 NULL (handled per-state by the
/// tokenizer), TAB, LF, FF, and CR (normalized to LF before this check can
/// see it).
#[must_use]
pub const fn is_disallowed_control(code_point: u32) -> bool {
    matches!(
        code_point,
        0x0001..=0x0008 | 0x000B | 0x000E..=0x001F | 0x007F..=0x009F
    )
}

/// The reserved set the preprocessor substitutes with U+FFFD: unpaired
/// surrogates, noncharacters, and controls outside the allow-list.
#[must_use]
pub const fn is_reserved_code_point(code_point: u32) -> bool {
    is_surrogate(code_point) || is_noncharacter(code_point) || is_disallowed_control(code_point)
}

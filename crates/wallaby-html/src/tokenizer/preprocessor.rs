//! The input stream preprocessor: the cursor beneath the tokenizer.
//!
//! [§ 13.2.3.5 Preprocessing the input stream](https://html.spec.whatwg.org/multipage/parsing.html#preprocessing-the-input-stream)
//!
//! The preprocessor owns the decoded 16-bit code unit buffer and hands the
//! tokenizer one logical code point per `advance` call: line endings are
//! normalized, surrogate pairs are recombined, and reserved code points are
//! substituted with U+FFFD. `document.write` style splices land at the scan
//! position via `insert`, and `retreat` steps backward one logical code point
//! at a time without ever landing inside a combined pair or an absorbed line
//! feed.

use strum_macros::Display;
use wallaby_common::warning::warn_once;

use super::code_points::{
    BOM_CODE_UNIT, CARRIAGE_RETURN, LINE_FEED, REPLACEMENT_CHARACTER, is_leading_surrogate,
    is_reserved_code_point, is_trailing_surrogate, surrogate_pair_code_point,
};

/// Line-ending normalization state carried across `advance` calls.
///
/// [§ 13.2.3.5](https://html.spec.whatwg.org/multipage/parsing.html#preprocessing-the-input-stream):
/// "Before the tokenization stage, the input stream must be preprocessed by
/// normalizing newlines. Thus, newlines in HTML DOMs are represented by LF
/// characters, and there are never any CR characters in the input to the
/// tokenization stage."
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
enum LineEndingState {
    /// No pending normalization.
    Normal,
    /// The previously consumed unit was a CR emitted as LF; an immediately
    /// following LF must be absorbed rather than re-emitted.
    PendingLineFeed,
}

/// [§ 13.2.3.5 Preprocessing the input stream](https://html.spec.whatwg.org/multipage/parsing.html#preprocessing-the-input-stream)
///
/// The stream cursor the tokenizer reads from. Owns the mutable code unit
/// buffer, the scan position, and the gap bookkeeping that keeps `retreat`
/// exact across surrogate pairs and absorbed line feeds.
#[derive(Debug)]
pub struct Preprocessor {
    /// Decoded 16-bit code units. Grows only through `insert`, never shrinks.
    buffer: Vec<u16>,
    /// Scan position in `buffer`: -1 before the start, past
    /// `last_unit_index` at end-of-stream.
    pos: isize,
    /// Index of the final valid code unit, -1 while the buffer is empty.
    last_unit_index: isize,
    /// The most recent buffer position that must be skipped an extra step
    /// when retreating (a pair's trailing half or an absorbed LF).
    last_gap_pos: Option<isize>,
    /// Superseded gap markers, restored as `retreat` unwinds past them.
    gap_stack: Vec<Option<isize>>,
    line_ending_state: LineEndingState,
}

impl Preprocessor {
    /// Create a preprocessor over already-decoded text.
    ///
    /// "One leading U+FEFF BYTE ORDER MARK character must be ignored if any
    /// are present in the input stream."
    #[must_use]
    pub fn new(html: &str) -> Self {
        Self::from_code_units(html.encode_utf16().collect())
    }

    /// Create a preprocessor over raw 16-bit code units.
    ///
    /// The upstream decoder may hand over units that do not form valid UTF-16
    /// (lone surrogates); those are substituted with U+FFFD when advanced
    /// over, never rejected.
    #[must_use]
    pub fn from_code_units(units: Vec<u16>) -> Self {
        // The BOM is suppressed by starting the cursor on it, so the first
        // advance steps past it. A U+FEFF arriving later via `insert` is an
        // ordinary character.
        let pos = if units.first() == Some(&BOM_CODE_UNIT) {
            0
        } else {
            -1
        };
        let mut preprocessor = Self {
            buffer: units,
            pos,
            last_unit_index: -1,
            last_gap_pos: None,
            gap_stack: Vec::new(),
            line_ending_state: LineEndingState::Normal,
        };
        preprocessor.update_last_unit_index();
        preprocessor
    }

    /// Current scan position in code units, for parse error reporting.
    #[must_use]
    pub const fn pos(&self) -> isize {
        self.pos
    }

    /// Splice additional markup at the scan position.
    ///
    /// "When a script inserts characters into the input stream, they are
    /// inserted at the current position": the chunk lands immediately after
    /// the last consumed unit and ahead of everything not yet scanned, so the
    /// next `advance` calls visit it first. The already-consumed prefix is
    /// left untouched.
    pub fn insert(&mut self, html: &str) {
        // pos >= -1 always, so pos + 1 is never negative; past end-of-stream
        // the splice point clamps to the end of the buffer.
        let at = usize::try_from(self.pos + 1)
            .unwrap_or_default()
            .min(self.buffer.len());
        let tail = self.buffer.split_off(at);
        self.buffer.extend(html.encode_utf16());
        self.buffer.extend(tail);
        self.update_last_unit_index();
    }

    /// Consume and return the next logical code point, or `None` at
    /// end-of-stream.
    ///
    /// Normalization happens here:
    /// - "all U+000D CARRIAGE RETURN (CR) characters must be converted to
    ///   U+000A LINE FEED (LF) characters"
    /// - "any U+000A LINE FEED (LF) characters that immediately follow a
    ///   U+000D CARRIAGE RETURN (CR) character must be ignored"
    /// - surrogate pairs are combined into the code point they encode
    /// - reserved code points are substituted with U+FFFD
    pub fn advance(&mut self) -> Option<char> {
        // Absorbed LF halves of CRLF pairs are skipped in a loop rather than
        // by recursion, so a long CR LF run cannot grow the call stack.
        loop {
            self.pos += 1;

            if self.pos > self.last_unit_index {
                return None;
            }

            let unit = self.unit_at(self.pos)?;

            if self.line_ending_state == LineEndingState::PendingLineFeed {
                self.line_ending_state = LineEndingState::Normal;
                if unit == LINE_FEED {
                    // The second half of a CRLF pair is invisible to the
                    // caller, but retreat must know to skip it.
                    self.push_gap();
                    continue;
                }
            }

            if unit == CARRIAGE_RETURN {
                self.line_ending_state = LineEndingState::PendingLineFeed;
                return Some('\n');
            }

            let code_point = if is_leading_surrogate(unit) {
                self.combine_surrogate_pair(unit)
            } else {
                u32::from(unit)
            };

            if is_reserved_code_point(code_point) {
                return Some(self.substitute(code_point));
            }

            return Some(char::from_u32(code_point).unwrap_or(REPLACEMENT_CHARACTER));
        }
    }

    /// Step the cursor back by exactly one logical code point.
    ///
    /// The inverse of the most recent `advance`: one unit ordinarily, two
    /// units when undoing a surrogate pair or an absorbed LF. Callers must
    /// not retreat past the first emitted code point; that precondition is
    /// not checked in release builds.
    pub fn retreat(&mut self) {
        if Some(self.pos) == self.last_gap_pos {
            self.last_gap_pos = self.gap_stack.pop().flatten();
            self.pos -= 1;
        }

        self.pos -= 1;
        debug_assert!(self.pos >= -1, "retreated past the start of the input stream");
    }

    /// Try to combine a leading surrogate with the unit after it.
    ///
    /// "Peek the pair character and recalculate the code point." Consuming
    /// the trailing half records a gap so a later retreat steps back over
    /// both units at once. A leading surrogate with no valid trailing half is
    /// left unpaired for the reserved code point substitution in `advance`.
    fn combine_surrogate_pair(&mut self, leading: u16) -> u32 {
        match self.unit_at(self.pos + 1) {
            Some(trailing) if is_trailing_surrogate(trailing) => {
                self.pos += 1;
                self.push_gap();
                surrogate_pair_code_point(leading, trailing)
            }
            _ => u32::from(leading),
        }
    }

    /// Substitute a reserved code point, reporting the parse error.
    ///
    /// "Any occurrences of surrogates, noncharacters, and controls other
    /// than ASCII whitespace and U+0000 NULL characters are parse errors."
    fn substitute(&self, code_point: u32) -> char {
        let pos = self.pos;
        warn_once(
            "HTML Preprocessor",
            &format!("reserved code point U+{code_point:04X} at position {pos}"),
        );
        REPLACEMENT_CHARACTER
    }

    /// Record a gap at the current position, superseding the previous marker.
    fn push_gap(&mut self) {
        self.gap_stack.push(self.last_gap_pos);
        self.last_gap_pos = Some(self.pos);
    }

    /// Recompute the final-unit index after the buffer grows.
    fn update_last_unit_index(&mut self) {
        // Vec guarantees len <= isize::MAX, so the conversion never fails.
        self.last_unit_index = isize::try_from(self.buffer.len()).unwrap_or(isize::MAX) - 1;
    }

    /// Read the code unit at `pos`, if it is a valid buffer index.
    fn unit_at(&self, pos: isize) -> Option<u16> {
        let index = usize::try_from(pos).ok()?;
        self.buffer.get(index).copied()
    }
}

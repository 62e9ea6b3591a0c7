//! HTML input stream preprocessing for the Wallaby engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **Input Stream Preprocessor** ([WHATWG § 13.2.3.5](https://html.spec.whatwg.org/multipage/parsing.html#preprocessing-the-input-stream))
//!   - CR and CRLF to LF newline normalization
//!   - Surrogate pair recombination over 16-bit code units
//!   - Reserved code point substitution with U+FFFD
//!   - Leading byte order mark suppression
//!   - Mid-stream insertion at the scan position (`document.write`)
//!   - Exact single-step retreat for tokenizer lookahead
//!
//! # Not Yet Implemented
//!
//! - Tokenizer state machine (§ 13.2.5)
//! - Tree construction (§ 13.2.6)
//! - Encoding sniffing and byte stream decoding (§ 13.2.3.1-13.2.3.4)

/// HTML tokenization stages; currently the input stream preprocessor.
pub mod tokenizer;

pub use tokenizer::Preprocessor;

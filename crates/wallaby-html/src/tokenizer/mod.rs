//! HTML input stream preprocessing.
//!
//! Implements [§ 13.2.3.5 Preprocessing the input stream](https://html.spec.whatwg.org/multipage/parsing.html#preprocessing-the-input-stream)
//! of the WHATWG HTML Living Standard. The tokenizer state machine (§ 13.2.5)
//! sits on top of this module and pulls one logical code point per call.

/// Code point constants and classification per the Infra standard.
pub mod code_points;
/// The stream cursor feeding the tokenizer one code point at a time.
pub mod preprocessor;

pub use preprocessor::Preprocessor;

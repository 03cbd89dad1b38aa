/// The parser state, the grammar entry point and the top-level `parse`.
pub mod core;

/// Scanner primitives: reading, advancing and whitespace skipping.
///
/// All position tracking lives here. The cursor counts characters, not bytes,
/// so error offsets line up one-to-one with the characters of the source.
pub mod cursor;

/// Primary and unary expression parsing.
///
/// Handles parenthesized groups, identifiers and calls, and the `+`/`-`
/// signs.
pub mod unary;

/// Binary operator parsing.
///
/// All operators share one precedence level and associate to the right.
pub mod binary;

/// Number literals, identifiers and argument lists.
pub mod utils;

/// The evaluator module computes the value of an AST.
///
/// The evaluator walks the tree produced by the parser, resolves identifiers
/// against the caller's environment, and applies the arithmetic operators.
///
/// # Responsibilities
/// - Evaluates every AST node variant with a single exhaustive dispatch.
/// - Applies numeric promotion between integers and reals.
/// - Reports unbound identifiers, kind mismatches and arithmetic faults.
pub mod evaluator;
/// The environment module defines what identifiers are bound to.
///
/// An environment maps names to either a plain value or a callable. It is
/// supplied by the caller and never modified during evaluation.
pub mod environment;
/// The parser module builds the abstract syntax tree (AST) from source text.
///
/// There is no separate lexer: the parser reads the text one character at a
/// time, skipping whitespace as it advances, and builds the tree by recursive
/// descent.
///
/// # Responsibilities
/// - Tracks the cursor position and skips whitespace.
/// - Converts text into `Expr` nodes (literals, variables, calls, operators).
/// - Reports syntax errors with the offset of the failing character.
pub mod parser;
/// The value module defines the numeric runtime type.
///
/// # Responsibilities
/// - Defines the `Value` enum (integer or real).
/// - Implements promotion between the two numeric kinds.
/// - Provides conversions from Rust numbers and from text.
pub mod value;

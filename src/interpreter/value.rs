/// The numeric value type and its promotion rules.
///
/// Defines `Value`, the result of every evaluation, along with conversions
/// from Rust numbers and from text.
pub mod core;

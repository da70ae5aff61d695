/// Character cursor over expression text.
///
/// This module provides the `TextCursor` scanning service consumed by the
/// tokenizer: peeking at the current character, advancing, skipping
/// whitespace, and extracting substrings by position range. Error columns are
/// expressed in the cursor's 0-based character positions.
pub mod cursor;
/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between floating-point
/// and integer types without risking silent data loss or rounding errors.
/// All functions return a `Result`, which is `Ok` if the conversion is exact,
/// or the caller-supplied error otherwise.
pub mod num;

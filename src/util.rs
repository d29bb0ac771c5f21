/// Numeric literal parsing helpers.
///
/// This module provides the permissive integer and float parsers behind
/// numeric literals: base prefixes, underscore separators, and the
/// validation both share.
pub mod num;

/// Addition and subtraction across the full kind cross-product.
pub mod addsub;
/// The comparison family, all derived from a single `less`.
pub mod comparison;
/// The logical connectives.
pub mod logic;
/// Multiplication and division, including string/bytes repetition and
/// duration scaling.
pub mod muldiv;
/// Exponentiation.
pub mod power;

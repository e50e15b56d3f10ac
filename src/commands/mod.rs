pub mod calc;
pub mod ops;
pub mod parse;

//! Core calculator: parser, operation catalog, dispatcher, output shaping.

pub mod dispatch;
pub mod linalg;
pub mod matrix;
pub mod ops;
pub mod render;
pub mod session;

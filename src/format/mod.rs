//! Rendering of Lie elements.

pub mod expr;

pub use expr::pretty;

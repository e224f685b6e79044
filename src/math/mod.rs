//! Small numeric building blocks.

pub mod uncertain;

pub use uncertain::UncertainValue;

//! Core types shared by every module: labels, counts, and errors.

pub mod error;
pub mod label;

pub use error::{Error, Result};
pub use label::{Count, Label};

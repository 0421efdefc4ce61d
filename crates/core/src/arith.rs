//! Arithmetics helpers

pub use smooth_operator::{checked, Error};

//! Core tests.

pub mod units;

//! Core types shared across the driver

pub mod errors;

pub use errors::{Error, Result};

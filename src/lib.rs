// Library crate exposing modules for the binary and integration tests

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod goldset;
pub mod model;
pub mod pipeline;
pub mod progress;
pub mod queries;
pub mod repository;
pub mod resolve;
pub mod syntax;
pub mod util;

pub use error::{GoldsetError, Result};

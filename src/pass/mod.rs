//! Password generation and output.

pub mod charset;
mod config;
mod error;
mod generate;
pub mod output;

pub use config::{DEFAULT_SPECIAL_CHARS, GenerationConfig};
pub use error::GenerateError;
pub use generate::{MAX_DRAWS_PER_CHAR, generate, generate_batch};

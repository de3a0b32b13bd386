//! Command-line caller: flags in, passwords out.

mod context;
mod error;
mod flags;
pub mod prompts;

pub use context::{Context, resolve_output_path};
pub use error::CliError;
pub use flags::CliFlags;

/// Run the CLI with parsed flags.
pub fn run(flags: CliFlags) -> Result<(), CliError> {
    Context::new(flags).run()
}

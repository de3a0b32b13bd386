use clap::Parser;

/// Constrained random password generator.
#[derive(Debug, Default, Parser)]
#[command(name = "passgen", version, about)]
pub struct CliFlags {
    /// Fixed password length (sets both --min and --max)
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// Minimum password length
    #[arg(long, value_name = "N")]
    pub min: Option<usize>,

    /// Maximum password length
    #[arg(long, value_name = "N")]
    pub max: Option<usize>,

    /// Number of passwords to generate
    #[arg(
        short,
        long,
        value_name = "N",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub number: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out special characters
    #[arg(long, conflicts_with = "special")]
    pub no_special: bool,

    /// Special characters to draw from
    #[arg(long, value_name = "CHARS", allow_hyphen_values = true)]
    pub special: Option<String>,

    /// Characters that must never appear
    #[arg(short = 'x', long, value_name = "CHARS", allow_hyphen_values = true)]
    pub exclude: Option<String>,

    /// Don't force one character from each enabled class
    #[arg(long)]
    pub no_ensure: bool,

    /// Avoid identical adjacent characters while filling (best effort)
    #[arg(long)]
    pub no_repeats: bool,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long)]
    pub board: bool,

    /// Append to a file (default: ./passwords.txt)
    #[arg(
        short,
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = ".",
        conflicts_with = "board"
    )]
    pub output: Option<String>,

    /// Draw from the OS random source
    #[arg(short, long, conflicts_with = "seed")]
    pub urandom: bool,

    /// Deterministic output from a fixed seed
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Start from saved settings instead of defaults
    #[arg(short, long)]
    pub saved: bool,

    /// Save the effective settings
    #[arg(long)]
    pub save: bool,

    /// Print pool size and entropy estimate to stderr
    #[arg(long)]
    pub stats: bool,

    /// Suppress warnings, prompts, and confirmations
    #[arg(short, long)]
    pub quiet: bool,
}

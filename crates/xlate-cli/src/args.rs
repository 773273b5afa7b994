use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use xlate_common::LiteralEncoding;

/// CLI arguments for the xlate-normalize binary.
#[derive(Parser, Debug)]
#[command(
    name = "xlate-normalize",
    version,
    about = "Move field initializers and initializer blocks into constructors and a static initialization routine"
)]
pub struct CliArgs {
    /// JSON input holding `unit` (the compilation unit) and optionally
    /// `bindings` (a binding table).
    pub input: PathBuf,

    /// Output format for the normalized unit.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// JSON file with normalizer options.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Name of the synthesized static initialization routine.
    #[arg(long = "class-init-name", alias = "classInitName")]
    pub class_init_name: Option<String>,

    /// Which string values may stay as declarative literals.
    #[arg(long = "literal-encoding", value_enum, ignore_case = true)]
    pub literal_encoding: Option<Encoding>,

    /// Print pass statistics to stderr.
    #[arg(long)]
    pub stats: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Source-like rendering.
    Text,
    /// The normalized unit as JSON.
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Encoding {
    Cpp,
    Ascii,
}

impl From<Encoding> for LiteralEncoding {
    fn from(value: Encoding) -> Self {
        match value {
            Encoding::Cpp => LiteralEncoding::Cpp,
            Encoding::Ascii => LiteralEncoding::Ascii,
        }
    }
}

//! Argument parsing for passgen.
//!
//! Flags shared by `gen` and `interactive` live in `OptionArgs`; each of
//! them falls back to a `PASSGEN_*` environment variable.

use clap::builder::{BoolishValueParser, TypedValueParser};
use clap::{ArgAction, Args, Parser, Subcommand};

use crate::generator::{GenerationOptions, DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};

#[derive(Parser, Debug)]
#[command(
    name = "passgen",
    version,
    about = "Generate random passwords and copy them to the clipboard",
    long_about = r#"
passgen builds a character pool from lowercase letters, optionally extended
with digits and special characters, and draws each character of the password
uniformly at random from it.

Typical usage:
  passgen gen
  passgen gen --length 16 --digits --symbols --copy
  passgen gen -n 5 --json
  passgen interactive

Special characters are drawn from: +-(){}*&^%$#@!
"#
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate one or more passwords and print them
    Gen(GenArgs),

    /// Adjust options from a menu and watch the password update
    ///
    /// Every change to the length or the character classes produces a
    /// fresh password, which can be copied to the clipboard at any time.
    Interactive(OptionArgs),
}

/// Options that shape the character pool and the password length.
#[derive(Args, Clone, Debug)]
pub struct OptionArgs {
    /// Length of the generated password
    #[arg(
        short,
        long,
        env = "PASSGEN_LENGTH",
        default_value_t = DEFAULT_LENGTH,
        value_parser = clap::value_parser!(u64)
            .range(MIN_LENGTH as u64..=MAX_LENGTH as u64)
            .map(|v| v as usize)
    )]
    pub length: usize,

    /// Include digits (0-9)
    #[arg(
        short,
        long,
        env = "PASSGEN_DIGITS",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub digits: bool,

    /// Include special characters (+-(){}*&^%$#@!)
    #[arg(
        short,
        long,
        env = "PASSGEN_SYMBOLS",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub symbols: bool,
}

impl OptionArgs {
    pub fn to_options(&self) -> GenerationOptions {
        GenerationOptions::new(self.length, self.digits, self.symbols)
    }
}

#[derive(Args, Clone, Debug)]
pub struct GenArgs {
    #[command(flatten)]
    pub options: OptionArgs,

    /// Number of passwords to generate
    #[arg(
        short = 'n',
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..=1000).map(|v| v as usize)
    )]
    pub count: usize,

    /// Copy the last generated password to the clipboard
    #[arg(short, long)]
    pub copy: bool,

    /// Clear the clipboard after this many seconds
    #[arg(long, value_name = "SECS", requires = "copy")]
    pub clear_after: Option<u64>,

    /// Print a JSON report instead of plain lines
    #[arg(long)]
    pub json: bool,
}

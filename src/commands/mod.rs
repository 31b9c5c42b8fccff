//! Subcommand handlers. `gen_pw` prints and exits, `interactive` keeps a
//! session open until the user quits.

use crate::cli::{Cli, Commands};
use crate::error::Result;

pub mod gen_pw;
pub mod interactive;

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Gen(args) => gen_pw::run(args),
        Commands::Interactive(args) => interactive::run(args),
    }
}

//! Generate one or more passwords.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::GenArgs;
use crate::error::Result;
use crate::generator::{self, CharacterPool, GenerationOptions};
use crate::ui;

/// Machine-readable output of `passgen gen --json`.
#[derive(Serialize, Debug)]
pub struct GenReport {
    #[serde(flatten)]
    pub options: GenerationOptions,
    pub pool_size: usize,
    pub passwords: Vec<String>,
}

impl GenReport {
    pub fn generate(options: GenerationOptions, count: usize) -> Self {
        let passwords = (0..count).map(|_| generator::generate(&options)).collect();
        Self {
            pool_size: CharacterPool::for_options(&options).len(),
            options,
            passwords,
        }
    }

    pub fn write_to<W: Write>(&self, out: &mut W, json: bool) -> Result<()> {
        if json {
            serde_json::to_writer_pretty(&mut *out, self)?;
            writeln!(out)?;
        } else {
            for pwd in &self.passwords {
                writeln!(out, "{}", pwd)?;
            }
        }
        Ok(())
    }
}

pub fn run(args: GenArgs) -> Result<()> {
    let options = args.options.to_options();
    log::debug!("generating {} password(s) with {:?}", args.count, options);

    let report = GenReport::generate(options, args.count);

    report.write_to(&mut io::stdout().lock(), args.json)?;

    if args.copy {
        if let Some(last) = report.passwords.last() {
            if ui::copy_or_warn(last) {
                if let Some(secs) = args.clear_after {
                    eprintln!("Clipboard will be cleared in {} seconds.", secs);
                    ui::spawn_clear_after(last.clone(), secs).join().ok();
                }
            }
        }
    }

    Ok(())
}

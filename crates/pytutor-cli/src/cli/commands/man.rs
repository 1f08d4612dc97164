//! `--man` – emit a roff man page on stdout.

use anyhow::Result;
use clap::CommandFactory;
use std::io::Write;

use crate::cli::Cli;

pub fn run_man() -> Result<()> {
    let man = clap_mangen::Man::new(Cli::command());
    let mut out = Vec::new();
    man.render(&mut out)?;
    std::io::stdout().write_all(&out)?;
    Ok(())
}

//! CLI for the pytutor embedder.

mod commands;
mod input;

use anyhow::Result;
use clap::Parser;
use clap_complete::Shell;
use pytutor_core::config::{self, PytutorConfig};
use pytutor_core::lang::Language;
use pytutor_core::options::{EmbedOptions, Presentation};
use std::path::PathBuf;

use commands::{run_completions, run_embed, run_link, run_man, run_open};

/// Top-level CLI for the pytutor embedder.
#[derive(Debug, Parser)]
#[command(name = "pytutor")]
#[command(about = "Embed code in pythontutor.com step-through visualizations", long_about = None)]
pub struct Cli {
    /// Source file to visualize; reads stdin when omitted.
    pub file: Option<PathBuf>,

    /// Language the visualizer steps through. One of: python2, python3,
    /// java, javascript, typescript, ruby, c, cpp.
    #[arg(short, long, value_name = "LANG")]
    pub lang: Option<Language>,

    /// Height of the embedded iframe in pixels.
    #[arg(short = 'H', long, value_name = "PX",
          value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// Open the visualizer in the system browser instead of embedding.
    #[arg(short, long)]
    pub tab: bool,

    /// Use https for the visualizer URL.
    #[arg(short, long)]
    pub secure: bool,

    /// Print a hyperlink to the visualizer instead of an iframe.
    #[arg(long)]
    pub link: bool,

    /// Visualize all stack frames cumulatively.
    #[arg(long)]
    pub cumulative: bool,

    /// Render primitive values as heap objects.
    #[arg(long)]
    pub heap_primitives: bool,

    /// Use text labels for object references.
    #[arg(long)]
    pub text_references: bool,

    /// Start the visualization at the last instruction.
    #[arg(long)]
    pub jump_to_end: bool,

    /// Step the visualization starts on.
    #[arg(long, default_value = "0", value_name = "N")]
    pub cur_instr: u32,

    /// Emit shell completions and exit.
    #[arg(long, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,

    /// Emit a roff man page and exit.
    #[arg(long, exclusive = true)]
    pub man: bool,
}

impl Cli {
    /// Merge flags over config-file defaults into the per-invocation record.
    /// Flags always win; the config only fills absent values.
    fn to_options(&self, cfg: &PytutorConfig) -> EmbedOptions {
        EmbedOptions {
            language: self.lang.or(cfg.language).unwrap_or_default(),
            height: self.height.or(cfg.height),
            open_in_new_tab: self.tab,
            secure: self.secure || cfg.secure,
            link_only: self.link,
            cumulative: self.cumulative,
            heap_primitives: self.heap_primitives,
            text_references: self.text_references,
            jump_to_end: self.jump_to_end,
            cur_instr: self.cur_instr,
        }
    }
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();

    // Generator modes exit before any config or input is touched.
    if let Some(shell) = cli.completions {
        run_completions(shell);
        return Ok(());
    }
    if cli.man {
        run_man()?;
        return Ok(());
    }

    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    let opts = cli.to_options(&cfg);
    let cell_text = input::read_cell_text(cli.file.as_deref())?;

    // Exactly one presentation mode per invocation; link wins over tab.
    match opts.presentation() {
        Presentation::Link => run_link(&cell_text, &opts),
        Presentation::Tab => run_open(&cell_text, &opts)?,
        Presentation::Inline => run_embed(&cell_text, &opts),
    }

    Ok(())
}

#[cfg(test)]
mod tests;

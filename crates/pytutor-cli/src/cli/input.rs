//! Cell-text acquisition: a file argument or stdin.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read the code to visualize from `file`, or stdin when absent. The
/// text is passed through verbatim; the URL builder handles escaping.
pub fn read_cell_text(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin")?;
            Ok(buf)
        }
    }
}

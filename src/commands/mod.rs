pub mod export;
pub mod fields;
pub mod grouping;
pub mod import;
pub mod normalize;
pub mod show;

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Write bytes to a file, or to stdout when no path is given
pub(crate) fn write_output(output: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, bytes)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes).context("Failed to write to stdout")?;
            stdout.flush().context("Failed to write to stdout")
        }
    }
}

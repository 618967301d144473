use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Open an input file for buffered line reading
pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    if path.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open input file {}", path.display()))?;

    Ok(BufReader::new(file))
}

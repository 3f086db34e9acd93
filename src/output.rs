//! Persisting and printing rendered boards

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::OutputError;

/// Write the raw SVG to `path`, creating or truncating the file
pub fn save_svg(path: &Path, svg: &str) -> Result<(), OutputError> {
    fs::write(path, svg).map_err(|source| OutputError::Save {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = svg.len(), "saved SVG");
    Ok(())
}

/// Encode the HTML as a one-element JSON array
pub fn encode_result(html: &str) -> Result<String, OutputError> {
    Ok(serde_json::to_string(&[html])?)
}

/// Print the encoded result followed by a newline
pub fn write_result<W: Write>(mut writer: W, html: &str) -> Result<(), OutputError> {
    let encoded = encode_result(html)?;
    writeln!(writer, "{}", encoded)?;
    writer.flush()?;
    Ok(())
}

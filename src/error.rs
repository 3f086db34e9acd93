//! Error types for glyph loading and output

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while parsing the embedded piece glyphs
#[derive(Error, Debug)]
pub enum GlyphError {
    #[error("glyph asset {name} has no root <svg> tag")]
    MissingRoot { name: String },

    #[error("glyph asset registered for unknown piece letter '{letter}'")]
    UnknownPiece { letter: char },
}

/// Errors raised while persisting or printing a rendered board
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Could not save SVG to file '{}': {}", .path.display(), .source)]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not encode result: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Could not write result: {0}")]
    Write(#[from] std::io::Error),
}

//! Render request decoding
//!
//! Requests arrive as `{ "data": "<fen>", "arguments": { "width": 1.0, "save": "" } }`.
//! Decoding is lenient: missing or malformed fields fall back to defaults and
//! never fail the request.

use std::collections::HashMap;
use std::path::PathBuf;

use serde_json::value::RawValue;
use serde_json::Value;
use tracing::debug;

/// Width ratio used when the request does not give a usable one
pub const DEFAULT_WIDTH_RATIO: f64 = 1.0;

/// A single render request
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    /// FEN text, trimmed
    pub fen: String,
    /// Figure width as a fraction of the container; negative omits the style
    pub width_ratio: f64,
    /// Where to write the raw SVG, if anywhere
    pub save_path: Option<PathBuf>,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            fen: String::new(),
            width_ratio: DEFAULT_WIDTH_RATIO,
            save_path: None,
        }
    }
}

impl RenderRequest {
    /// Create a request for `fen` with default options
    pub fn new(fen: impl Into<String>) -> Self {
        Self {
            fen: fen.into().trim().to_string(),
            ..Self::default()
        }
    }

    /// Set the width ratio
    pub fn with_width_ratio(mut self, ratio: f64) -> Self {
        self.width_ratio = ratio;
        self
    }

    /// Set the save path
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = Some(path.into());
        self
    }

    /// Decode a request from JSON text.
    ///
    /// Each field is decoded on its own from its raw JSON text, so one bad
    /// field (an out-of-range number, a wrong type) only resets that field.
    pub fn from_json(input: &str) -> Self {
        let Some(fields) = raw_object(input) else {
            debug!("request is not a JSON object, using defaults");
            return Self::default();
        };
        let arguments = fields
            .get("arguments")
            .and_then(|raw| raw_object(raw.get()))
            .unwrap_or_default();

        let fen = fields.get("data").and_then(|raw| raw_string(raw)).unwrap_or_default();

        let width_ratio = arguments
            .get("width")
            .and_then(|raw| width_from_raw(raw))
            .unwrap_or(DEFAULT_WIDTH_RATIO);

        let save_path = arguments
            .get("save")
            .and_then(|raw| raw_string(raw))
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Self {
            fen: fen.trim().to_string(),
            width_ratio,
            save_path,
        }
    }
}

type RawObject = HashMap<String, Box<RawValue>>;

/// Split a JSON object into its members without interpreting their values
fn raw_object(json: &str) -> Option<RawObject> {
    serde_json::from_str(json)
        .map_err(|e| debug!(error = %e, "skipping malformed object"))
        .ok()
}

fn raw_string(raw: &RawValue) -> Option<String> {
    serde_json::from_str(raw.get()).ok()
}

/// Numbers are used directly, numeric strings are parsed. Non-finite
/// ratios count as unusable.
fn width_from_raw(raw: &RawValue) -> Option<f64> {
    let value = serde_json::from_str::<Value>(raw.get())
        .map_err(|e| debug!(error = %e, width = raw.get(), "ignoring unreadable width"))
        .ok()?;
    let width = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    width.filter(|w| w.is_finite())
}

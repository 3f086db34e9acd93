//! Capability manifest describing the tool to a host pipeline

use serde::Serialize;

/// Top-level manifest document
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub transforms: Vec<TransformDescriptor>,
}

/// One supported input/output conversion
#[derive(Debug, Clone, Serialize)]
pub struct TransformDescriptor {
    pub from: String,
    pub to: Vec<String>,
    pub arguments: Vec<ArgumentDescriptor>,
}

/// A documented transform argument
#[derive(Debug, Clone, Serialize)]
pub struct ArgumentDescriptor {
    pub name: String,
    pub description: String,
    pub default: ArgumentDefault,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArgumentDefault {
    Float(f64),
    Text(String),
}

impl Manifest {
    /// The manifest for the FEN board transform
    pub fn fen_board() -> Self {
        Self {
            name: "fen".to_string(),
            version: "0.1".to_string(),
            description: "Create chess boards from FEN strings.".to_string(),
            transforms: vec![TransformDescriptor {
                from: "fen".to_string(),
                to: vec!["html".to_string()],
                arguments: vec![
                    ArgumentDescriptor {
                        name: "width".to_string(),
                        description: "Width of the SVG, given as a ratio to the surrounding figure tag (created automatically).".to_string(),
                        default: ArgumentDefault::Float(crate::request::DEFAULT_WIDTH_RATIO),
                        kind: Some("f64".to_string()),
                    },
                    ArgumentDescriptor {
                        name: "save".to_string(),
                        description: "The name of the SVG file that is saved. No file is saved if this argument is left empty.".to_string(),
                        default: ArgumentDefault::Text(String::new()),
                        kind: None,
                    },
                ],
            }],
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

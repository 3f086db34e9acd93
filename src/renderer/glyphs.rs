//! Piece glyph table
//!
//! Each piece is an embedded SVG asset, parsed once into a template whose
//! root `<svg` tag has an insertion point for the position attributes.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::GlyphError;
use crate::fen::Piece;

const ROOT_TAG: &str = "<svg";

/// (FEN letter, asset name, markup)
const ASSETS: [(char, &str, &str); 12] = [
    ('K', "wk.svg", include_str!("../../assets/pieces/wk.svg")),
    ('Q', "wq.svg", include_str!("../../assets/pieces/wq.svg")),
    ('R', "wr.svg", include_str!("../../assets/pieces/wr.svg")),
    ('B', "wb.svg", include_str!("../../assets/pieces/wb.svg")),
    ('N', "wn.svg", include_str!("../../assets/pieces/wn.svg")),
    ('P', "wp.svg", include_str!("../../assets/pieces/wp.svg")),
    ('k', "bk.svg", include_str!("../../assets/pieces/bk.svg")),
    ('q', "bq.svg", include_str!("../../assets/pieces/bq.svg")),
    ('r', "br.svg", include_str!("../../assets/pieces/br.svg")),
    ('b', "bb.svg", include_str!("../../assets/pieces/bb.svg")),
    ('n', "bn.svg", include_str!("../../assets/pieces/bn.svg")),
    ('p', "bp.svg", include_str!("../../assets/pieces/bp.svg")),
];

static GLYPHS: Lazy<HashMap<Piece, GlyphTemplate>> =
    Lazy::new(|| load_glyphs().expect("Embedded piece glyphs should be valid"));

/// A glyph split at the point where position attributes go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphTemplate {
    head: String,
    tail: String,
}

impl GlyphTemplate {
    /// Parse glyph markup. Line breaks are dropped so the glyph can be
    /// concatenated into a single-line document.
    pub fn parse(name: &str, markup: &str) -> Result<Self, GlyphError> {
        let markup: String = markup.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();

        let start = markup.find(ROOT_TAG).ok_or_else(|| GlyphError::MissingRoot {
            name: name.to_string(),
        })?;
        let split = start + ROOT_TAG.len();

        // `<svgfoo` is some other element
        if !markup[split..].starts_with(|c: char| c.is_whitespace() || c == '>') {
            return Err(GlyphError::MissingRoot {
                name: name.to_string(),
            });
        }

        Ok(Self {
            head: markup[..split].to_string(),
            tail: markup[split..].to_string(),
        })
    }

    /// Render the glyph with its root placed at `(x, y)`
    pub fn render_at(&self, x: usize, y: usize) -> String {
        format!(r#"{} x="{}" y="{}"{}"#, self.head, x, y, self.tail)
    }
}

fn load_glyphs() -> Result<HashMap<Piece, GlyphTemplate>, GlyphError> {
    ASSETS
        .iter()
        .map(|&(letter, name, markup)| -> Result<(Piece, GlyphTemplate), GlyphError> {
            let piece = Piece::from_fen_char(letter)
                .ok_or(GlyphError::UnknownPiece { letter })?;
            Ok((piece, GlyphTemplate::parse(name, markup)?))
        })
        .collect()
}

/// Look up the glyph for a piece
pub fn glyph(piece: Piece) -> Option<&'static GlyphTemplate> {
    GLYPHS.get(&piece)
}

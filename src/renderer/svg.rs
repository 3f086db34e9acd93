//! SVG generation for a board position

use tracing::{debug, trace};

use crate::fen::scan_placement;

use super::board::add_checkerboard;
use super::glyphs::{self, GlyphTemplate};
use super::BoardConfig;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Build the board document incrementally
pub struct BoardSvgBuilder {
    config: BoardConfig,
    elements: Vec<String>,
    glyph_count: usize,
}

impl BoardSvgBuilder {
    /// Create a new board builder
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            elements: vec![],
            glyph_count: 0,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Number of piece glyphs added so far
    pub fn glyph_count(&self) -> usize {
        self.glyph_count
    }

    /// Add a rectangle anchored at the origin
    pub fn add_background(&mut self, width: usize, height: usize, fill: &str) {
        self.elements.push(format!(
            r#"<rect width="{}" height="{}" style="fill:{}"/>"#,
            width, height, fill
        ));
    }

    /// Add a square of edge `size` at `(x, y)`
    pub fn add_square(&mut self, x: usize, y: usize, size: usize, fill: &str) {
        self.elements.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" style="fill:{}"/>"#,
            x, y, size, size, fill
        ));
    }

    /// Add a piece glyph to the square whose top-left corner is `(x, y)`
    pub fn add_glyph(&mut self, glyph: &GlyphTemplate, x: usize, y: usize) {
        let margin = self.config.glyph_margin;
        self.elements.push(glyph.render_at(x + margin, y + margin));
        self.glyph_count += 1;
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let size = self.config.board_size();
        let mut svg = format!(
            r#"<svg xmlns="{}" width="{}" height="{}">"#,
            SVG_NAMESPACE, size, size
        );
        for elem in &self.elements {
            svg.push_str(elem);
        }
        svg.push_str("</svg>");
        svg
    }
}

/// Render the position in `fen` to an SVG document with the default board
pub fn render_board(fen: &str) -> String {
    render_board_with_config(fen, &BoardConfig::default())
}

/// Render the position in `fen` to an SVG document
pub fn render_board_with_config(fen: &str, config: &BoardConfig) -> String {
    let mut builder = BoardSvgBuilder::new(config.clone());
    add_checkerboard(&mut builder);
    place_pieces(&mut builder, fen);
    debug!(glyphs = builder.glyph_count(), "rendered board");
    builder.build()
}

fn place_pieces(builder: &mut BoardSvgBuilder, fen: &str) {
    let size = builder.config().square_size;

    for placement in scan_placement(fen) {
        let Some(glyph) = placement.piece.and_then(glyphs::glyph) else {
            trace!(code = %placement.code, square = placement.square.0, "skipping unknown piece code");
            continue;
        };
        let x = placement.square.file() * size;
        let y = placement.square.rank_row() * size;
        builder.add_glyph(glyph, x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph_positions(svg: &str) -> Vec<(usize, usize)> {
        svg.match_indices(r#"<svg x=""#)
            .map(|(i, _)| {
                let rest = &svg[i + r#"<svg x=""#.len()..];
                let (x, rest) = rest.split_once('"').unwrap();
                let rest = rest.strip_prefix(r#" y=""#).unwrap();
                let (y, _) = rest.split_once('"').unwrap();
                (x.parse().unwrap(), y.parse().unwrap())
            })
            .collect()
    }

    #[test]
    fn test_document_root() {
        let svg = render_board("8/8/8/8/8/8/8/8");
        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="400">"#
        ));
        assert!(svg.ends_with("</svg>"));
        assert!(!svg.contains('\n'));
    }

    #[test]
    fn test_empty_board_has_no_glyphs() {
        let svg = render_board("8/8/8/8/8/8/8/8");
        assert!(glyph_positions(&svg).is_empty());
        assert_eq!(svg.matches("<svg").count(), 1);
    }

    #[test]
    fn test_glyph_offset_within_square() {
        let svg = render_board("8/8/8/8/8/8/8/7K");
        assert_eq!(glyph_positions(&svg), vec![(352, 352)]);
    }

    #[test]
    fn test_start_position_corners() {
        let svg = render_board("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
        let positions = glyph_positions(&svg);
        assert_eq!(positions.len(), 32);
        assert_eq!(positions.first(), Some(&(2, 2)));
        assert_eq!(positions.last(), Some(&(352, 352)));
    }

    #[test]
    fn test_unknown_code_leaves_square_empty() {
        let svg = render_board("?K6/8/8/8/8/8/8/8");
        assert_eq!(glyph_positions(&svg), vec![(52, 2)]);
    }

    #[test]
    fn test_builder_counts_glyphs() {
        let mut builder = BoardSvgBuilder::new(BoardConfig::default());
        place_pieces(&mut builder, "kq6/8/8/8/8/8/8/6QK");
        assert_eq!(builder.glyph_count(), 4);
    }
}

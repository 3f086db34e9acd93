//! Board renderer: SVG markup for the checkerboard and pieces, plus the
//! HTML wrapper that embeds it.

pub mod board;
pub mod config;
pub mod glyphs;
pub mod html;
pub mod svg;

pub use config::BoardConfig;
pub use html::{render_html, width_percentage};
pub use svg::{render_board, render_board_with_config, BoardSvgBuilder};

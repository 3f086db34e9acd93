//! fen-board - chessboard images from FEN strings
//!
//! Renders the piece placement of a FEN string as a 400x400 SVG board and
//! wraps it in an HTML `<figure>` with the SVG embedded as a base64 data URI.
//!
//! # Example
//!
//! ```rust
//! use fen_board::{transform, RenderRequest};
//!
//! let request = RenderRequest::new("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR")
//!     .with_width_ratio(0.5);
//! let image = transform(&request);
//!
//! assert!(image.svg.starts_with("<svg"));
//! assert!(image.html.contains(r#"style="width:50%""#));
//! ```

pub mod error;
pub mod fen;
pub mod manifest;
pub mod output;
pub mod renderer;
pub mod request;

pub use error::{GlyphError, OutputError};
pub use fen::{Color, Piece, PieceKind, Square};
pub use manifest::Manifest;
pub use renderer::{render_board, render_board_with_config, render_html, BoardConfig};
pub use request::RenderRequest;

use tracing::debug;

/// A rendered board: the SVG document and the HTML embedding it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardImage {
    pub svg: String,
    pub html: String,
}

/// Render a request to SVG and HTML
///
/// # Example
///
/// ```rust
/// use fen_board::{transform, RenderRequest};
///
/// let image = transform(&RenderRequest::new("8/8/8/8/8/8/8/8").with_width_ratio(-1.0));
/// assert!(image.html.starts_with("<figure><img src=\"data:image/svg+xml;base64,"));
/// assert!(!image.html.contains("style="));
/// ```
pub fn transform(request: &RenderRequest) -> BoardImage {
    debug!(fen = %request.fen, width_ratio = request.width_ratio, "rendering board");
    let svg = render_board(&request.fen);
    let html = render_html(&svg, request.width_ratio);
    BoardImage { svg, html }
}

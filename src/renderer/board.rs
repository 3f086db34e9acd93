//! Checkerboard background

use super::{BoardConfig, BoardSvgBuilder};

/// Add the checkerboard to `builder`.
///
/// One light rectangle covers the whole board and the 32 dark squares are
/// drawn over it. Square 0 (a8) is light, so row 0 starts its dark squares
/// one square in and the offset alternates per row.
pub fn add_checkerboard(builder: &mut BoardSvgBuilder) {
    let config = builder.config().clone();
    let size = config.square_size;
    let board = config.board_size();

    builder.add_background(board, board, &config.light_color);

    let mut start_x = size;
    for y in (0..board).step_by(size) {
        for x in (start_x..board).step_by(2 * size) {
            builder.add_square(x, y, size, &config.dark_color);
        }
        start_x = if start_x == 0 { size } else { 0 };
    }
}

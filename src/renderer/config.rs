//! Configuration for board rendering

/// Geometry and colors of the rendered board
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Edge length of one square in device units
    pub square_size: usize,

    /// Light square color, also used for the full-board background
    pub light_color: String,

    /// Dark square color
    pub dark_color: String,

    /// Offset of a glyph from the top-left corner of its square
    pub glyph_margin: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            square_size: 50,
            light_color: "#FFCD9F".to_string(),
            dark_color: "#D08C52".to_string(),
            glyph_margin: 2,
        }
    }
}

impl BoardConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Edge length of the whole board
    pub fn board_size(&self) -> usize {
        self.square_size * crate::fen::BOARD_FILES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.square_size, 50);
        assert_eq!(config.board_size(), 400);
        assert_eq!(config.light_color, "#FFCD9F");
        assert_eq!(config.dark_color, "#D08C52");
        assert_eq!(config.glyph_margin, 2);
    }
}

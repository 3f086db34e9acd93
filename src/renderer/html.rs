//! HTML wrapper embedding the board as a data URI

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Width style percentage for a ratio, or `None` when the ratio is negative
/// or not finite.
///
/// Rounds half away from zero.
pub fn width_percentage(ratio: f64) -> Option<i64> {
    if ratio.is_finite() && ratio >= 0.0 {
        Some((ratio * 100.0).round() as i64)
    } else {
        None
    }
}

/// Wrap an SVG document in a `<figure>` holding a base64 `<img>`
pub fn render_html(svg: &str, width_ratio: f64) -> String {
    let encoded = STANDARD.encode(svg.as_bytes());
    let style = width_percentage(width_ratio)
        .map(|percent| format!(r#" style="width:{}%""#, percent))
        .unwrap_or_default();

    format!(
        r#"<figure><img src="data:image/svg+xml;base64,{}"{}/></figure>"#,
        encoded, style
    )
}

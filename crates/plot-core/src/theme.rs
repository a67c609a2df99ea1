// File: crates/plot-core/src/theme.rs
// Summary: Light theme colors for chart rendering.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub line_stroke: skia::Color,
}

impl Theme {
    /// White figure, black spines and text, light grey grid, blue line.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 0xb0, 0xb0, 0xb0),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            title: skia::Color::from_argb(255, 0, 0, 0),
            line_stroke: skia::Color::from_argb(255, 0x1f, 0x77, 0xb4),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_light_with_blue_line() {
        let t = Theme::default();
        assert_eq!(t.name, "light");
        assert_eq!(t.background, skia::Color::WHITE);
        assert_eq!(t.line_stroke, skia::Color::from_argb(255, 0x1f, 0x77, 0xb4));
    }
}

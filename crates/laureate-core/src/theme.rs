// File: crates/laureate-core/src/theme.rs
// Summary: Light/Dark theming and the qualitative series palette.

use skia_safe as skia;

/// Ten-color qualitative palette (d3 "category10").
pub const CATEGORY10: [skia::Color; 10] = [
    skia::Color::new(0xFF1F_77B4), // blue
    skia::Color::new(0xFFFF_7F0E), // orange
    skia::Color::new(0xFF2C_A02C), // green
    skia::Color::new(0xFFD6_2728), // red
    skia::Color::new(0xFF94_67BD), // purple
    skia::Color::new(0xFF8C_564B), // brown
    skia::Color::new(0xFFE3_77C2), // pink
    skia::Color::new(0xFF7F_7F7F), // gray
    skia::Color::new(0xFFBC_BD22), // olive
    skia::Color::new(0xFF17_BECF), // cyan
];

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub tick: skia::Color,
    pub tick_label: skia::Color,
    pub text: skia::Color,
    pub palette: &'static [skia::Color],
}

impl Theme {
    /// Black ink on a white page.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            tick_label: skia::Color::from_argb(255, 0, 0, 0),
            text: skia::Color::from_argb(255, 0, 0, 0),
            palette: &CATEGORY10,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            tick_label: skia::Color::from_argb(255, 210, 210, 220),
            text: skia::Color::from_argb(255, 235, 235, 245),
            palette: &CATEGORY10,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

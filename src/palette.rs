//! Color buttons page: pick a swatch, repaint the page background and flip the
//! text color to whatever stays readable on it.

pub const NEUTRAL_BACKGROUND: &str = "#f9fafb";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contrast {
    /// White text.
    Light,
    /// Black text.
    Dark,
}

impl Contrast {
    pub fn text_color(self) -> &'static str {
        match self {
            Contrast::Light => "#ffffff",
            Contrast::Dark => "#000000",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub background: &'static str,
    pub hover: &'static str,
    pub contrast: Contrast,
}

pub const SWATCHES: [Swatch; 11] = [
    swatch("Red", "#ef4444", "#dc2626", Contrast::Light),
    swatch("Blue", "#3b82f6", "#2563eb", Contrast::Light),
    swatch("Green", "#22c55e", "#16a34a", Contrast::Light),
    swatch("Yellow", "#facc15", "#eab308", Contrast::Dark),
    swatch("Purple", "#a855f7", "#9333ea", Contrast::Light),
    swatch("Pink", "#ec4899", "#db2777", Contrast::Light),
    swatch("Indigo", "#6366f1", "#4f46e5", Contrast::Light),
    swatch("Orange", "#f97316", "#ea580c", Contrast::Light),
    swatch("Teal", "#14b8a6", "#0d9488", Contrast::Light),
    swatch("Gray", "#6b7280", "#4b5563", Contrast::Light),
    swatch("Black", "#000000", "#1f2937", Contrast::Light),
];

const fn swatch(
    name: &'static str,
    background: &'static str,
    hover: &'static str,
    contrast: Contrast,
) -> Swatch {
    Swatch {
        name,
        background,
        hover,
        contrast,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteState {
    pub background: &'static str,
    pub contrast: Contrast,
    pub selected: Option<&'static str>,
}

impl Default for PaletteState {
    fn default() -> Self {
        Self {
            background: NEUTRAL_BACKGROUND,
            contrast: Contrast::Dark,
            selected: None,
        }
    }
}

impl PaletteState {
    /// Returns false and changes nothing when `name` is not a known swatch.
    pub fn select(&mut self, name: &str) -> bool {
        let Some(swatch) = SWATCHES.iter().find(|s| s.name == name) else {
            return false;
        };
        self.background = swatch.background;
        self.contrast = swatch.contrast;
        self.selected = Some(swatch.name);
        true
    }
}

//! Preset colour palettes offered by the fill and stroke pickers.

use egui::Color32;

pub const LIGHT_BLUE: Color32 = Color32::from_rgb(0xAD, 0xD8, 0xE6);

/// Named colours offered for fills.
pub const FILL_COLORS: [(&str, Color32); 12] = [
    ("Red", Color32::from_rgb(0xFF, 0x00, 0x00)),
    ("Blue", Color32::from_rgb(0x00, 0x00, 0xFF)),
    ("Green", Color32::from_rgb(0x00, 0x80, 0x00)),
    ("Yellow", Color32::from_rgb(0xFF, 0xFF, 0x00)),
    ("Orange", Color32::from_rgb(0xFF, 0xA5, 0x00)),
    ("Purple", Color32::from_rgb(0x80, 0x00, 0x80)),
    ("Pink", Color32::from_rgb(0xFF, 0xC0, 0xCB)),
    ("Light blue", LIGHT_BLUE),
    ("Light green", Color32::from_rgb(0x90, 0xEE, 0x90)),
    ("White", Color32::from_rgb(0xFF, 0xFF, 0xFF)),
    ("Black", Color32::from_rgb(0x00, 0x00, 0x00)),
    ("Gray", Color32::from_rgb(0x80, 0x80, 0x80)),
];

/// Named colours offered for strokes.
pub const STROKE_COLORS: [(&str, Color32); 9] = [
    ("Black", Color32::from_rgb(0x00, 0x00, 0x00)),
    ("Red", Color32::from_rgb(0xFF, 0x00, 0x00)),
    ("Blue", Color32::from_rgb(0x00, 0x00, 0xFF)),
    ("Green", Color32::from_rgb(0x00, 0x80, 0x00)),
    ("Purple", Color32::from_rgb(0x80, 0x00, 0x80)),
    ("Orange", Color32::from_rgb(0xFF, 0xA5, 0x00)),
    ("White", Color32::from_rgb(0xFF, 0xFF, 0xFF)),
    ("Gray", Color32::from_rgb(0x80, 0x80, 0x80)),
    ("Brown", Color32::from_rgb(0xA5, 0x2A, 0x2A)),
];

/// `#RRGGBB` with uppercase hex digits. Alpha is dropped.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
}

/// Text colour that stays readable on top of `background`.
pub fn contrast_color(background: Color32) -> Color32 {
    let luminance = (0.299 * background.r() as f32
        + 0.587 * background.g() as f32
        + 0.114 * background.b() as f32)
        / 255.0;
    if luminance > 0.5 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}

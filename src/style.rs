// Icon palette and proportions

/// RGBA color as stored in the palette constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn to_paint(self) -> tiny_skia::Paint<'static> {
        let mut paint = tiny_skia::Paint::default();
        paint.set_color_rgba8(self.r, self.g, self.b, self.a);
        paint.anti_alias = true;
        paint
    }
}

// --- Colors ---
pub const BACKGROUND: Rgba = Rgba { r: 0, g: 0, b: 0, a: 0 };
pub const SHIELD_FILL: Rgba = Rgba::opaque(59, 130, 246); // #3B82F6
pub const SHIELD_OUTLINE: Rgba = Rgba::opaque(30, 64, 175); // #1E40AF
pub const CHECK_STROKE: Rgba = Rgba::opaque(255, 255, 255);

// --- Shield proportions ---
pub const SHIELD_TOP: f32 = 0.15;
pub const SHIELD_BOTTOM: f32 = 0.85;
pub const SHIELD_WIDTH: f32 = 0.65;
pub const SHIELD_SHOULDER: f32 = 0.7; // of shield width, below the top edge
pub const SHIELD_OUTLINE_WIDTH: f32 = 1.0;

// --- Checkmark proportions ---
pub const CHECK_WIDTH: f32 = 0.45;
pub const CHECK_HEIGHT: f32 = 0.35;
pub const CHECK_MIN_THICKNESS: u32 = 3;
pub const CHECK_THICKNESS_DIVISOR: u32 = 10;

// --- Output ---
pub const DEFAULT_SIZES: [u32; 4] = [16, 32, 48, 128];
pub const OUTPUT_DIR_NAME: &str = "icons";

pub fn icon_file_name(size: u32) -> String {
    format!("icon-{}.png", size)
}

//! Colors of blocks and balls
//!
//! Color is gameplay state here, not just decoration: a ball takes on the
//! color of the last block it broke, and a block does not react to a ball
//! that already matches it.

use serde::{Deserialize, Serialize};

/// Packed `0xRRGGBB` color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xFFFFFF);
    pub const GRAY: Color = Color(0x808080);
    pub const LIGHT_GRAY: Color = Color(0xC0C0C0);
    pub const RED: Color = Color(0xFF0000);
    pub const YELLOW: Color = Color(0xFFFF00);
    pub const BLUE: Color = Color(0x0000FF);
    pub const PINK: Color = Color(0xFFAFAF);
    pub const GREEN: Color = Color(0x00FF00);
    pub const ORANGE: Color = Color(0xFFC800);

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color((r as u32) << 16 | (g as u32) << 8 | b as u32)
    }
}

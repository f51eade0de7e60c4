//! Display metadata
//!
//! Presentation constants that ride alongside the engine without ever
//! entering it: a frontend takes a `GameMeta` to draw with, the simulation
//! never sees one.

use serde::{Deserialize, Serialize};

/// RGB colors for the three things on screen, as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub truck: u32,
    pub barrier: u32,
    pub track: u32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            truck: 0xe67e22,
            barrier: 0xc0392b,
            track: 0x2c3e50,
        }
    }
}

impl Palette {
    /// `0xRRGGBB` as a CSS color string.
    pub fn css_hex(color: u32) -> String {
        format!("#{:06x}", color & 0xff_ff_ff)
    }
}

/// Everything a display layer needs that isn't game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMeta {
    pub palette: Palette,
    /// Intended redraw rate in frames per second
    pub frame_rate: u32,
    /// Pixel size of one track cell, width then height
    pub cell_size: (u32, u32),
}

impl Default for GameMeta {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            frame_rate: 14,
            cell_size: (28, 28),
        }
    }
}

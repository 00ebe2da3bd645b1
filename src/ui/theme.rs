//! Colors and sizes for the Chain Reaction window

use egui::Color32;

pub const BACKGROUND: Color32 = Color32::from_rgb(30, 30, 30);
pub const CELL_BG: Color32 = Color32::from_rgb(50, 50, 50);

pub const RED_ORB: Color32 = Color32::from_rgb(200, 50, 50);
pub const BLUE_ORB: Color32 = Color32::from_rgb(50, 110, 255);

pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(235, 200, 80);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 240);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(140, 145, 155);
pub const TEXT_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const CELL_SIZE: f32 = 70.0;
pub const CELL_GAP: f32 = 4.0;
pub const CELL_ROUNDING: u8 = 10;
pub const BOARD_PADDING: f32 = 32.0;
pub const ORB_RADIUS: f32 = 12.0;
/// Distance of orb centers from the cell center, as a share of the cell
pub const ORB_RING_RATIO: f32 = 0.18;

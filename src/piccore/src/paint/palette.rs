// This file is part of PicEdit.
// Copyright (C) 2026 PicEdit contributors
//
// PicEdit is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// PicEdit is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with PicEdit.  If not, see <https://www.gnu.org/licenses/>.

//! The fixed 16 color EGA palette pictures are drawn with.

pub const PALETTE_SIZE: usize = 16;

/// Palette index used for "no color". Never stored in a picture.
pub const TRANSPARENT: u8 = 16;

pub const BLACK: u8 = 0;
pub const BLUE: u8 = 1;
pub const GREEN: u8 = 2;
pub const CYAN: u8 = 3;
pub const RED: u8 = 4;
pub const MAGENTA: u8 = 5;
pub const BROWN: u8 = 6;
pub const LIGHT_GREY: u8 = 7;
pub const DARK_GREY: u8 = 8;
pub const LIGHT_BLUE: u8 = 9;
pub const LIGHT_GREEN: u8 = 10;
pub const LIGHT_CYAN: u8 = 11;
pub const PINK: u8 = 12;
pub const LIGHT_MAGENTA: u8 = 13;
pub const YELLOW: u8 = 14;
pub const WHITE: u8 = 15;

#[rustfmt::skip]
static EGA_RGB: [[u8; 3]; PALETTE_SIZE] = [
    [0x00, 0x00, 0x00],
    [0x00, 0x00, 0xaa],
    [0x00, 0xaa, 0x00],
    [0x00, 0xaa, 0xaa],
    [0xaa, 0x00, 0x00],
    [0xaa, 0x00, 0xaa],
    [0xaa, 0x55, 0x00],
    [0xaa, 0xaa, 0xaa],
    [0x55, 0x55, 0x55],
    [0x55, 0x55, 0xff],
    [0x55, 0xff, 0x55],
    [0x55, 0xff, 0xff],
    [0xff, 0x55, 0x55],
    [0xff, 0x55, 0xff],
    [0xff, 0xff, 0x55],
    [0xff, 0xff, 0xff],
];

static NAMES: [&str; PALETTE_SIZE] = [
    "black",
    "blue",
    "green",
    "cyan",
    "red",
    "magenta",
    "brown",
    "light grey",
    "dark grey",
    "light blue",
    "light green",
    "light cyan",
    "pink",
    "light magenta",
    "yellow",
    "white",
];

/// Get the RGBA value of a palette index.
/// The transparent sentinel (and anything out of range) is fully transparent.
pub fn rgba(index: u8) -> [u8; 4] {
    match EGA_RGB.get(index as usize) {
        Some(&[r, g, b]) => [r, g, b, 0xff],
        None => [0, 0, 0, 0],
    }
}

pub fn color_name(index: u8) -> &'static str {
    NAMES.get(index as usize).copied().unwrap_or("transparent")
}

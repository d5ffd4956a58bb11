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

use super::rect::{Point, Resolution};

use std::fmt;

/// Largest supported brush size (a 15 row tall brush)
pub const MAX_BRUSH_SIZE: u8 = 7;

const SQUARE_BIT: u8 = 0x10;
const SPRAY_BIT: u8 = 0x20;
const SIZE_MASK: u8 = 0x07;

/// Number of distinct spray patterns. A pattern byte is `n << 1`.
pub const PATTERN_COUNT: u8 = 120;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BrushShape {
    #[default]
    Circle,
    Square,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BrushTexture {
    #[default]
    Solid,
    Spray,
}

/// Brush settings as stored in a brush type byte
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrushType {
    pub shape: BrushShape,
    pub texture: BrushTexture,
    pub size: u8,
}

impl BrushType {
    pub fn new(shape: BrushShape, texture: BrushTexture, size: u8) -> BrushType {
        BrushType {
            shape,
            texture,
            size: size.min(MAX_BRUSH_SIZE),
        }
    }

    pub fn from_byte(b: u8) -> BrushType {
        BrushType {
            shape: if b & SQUARE_BIT != 0 {
                BrushShape::Square
            } else {
                BrushShape::Circle
            },
            texture: if b & SPRAY_BIT != 0 {
                BrushTexture::Spray
            } else {
                BrushTexture::Solid
            },
            size: b & SIZE_MASK,
        }
    }

    pub fn to_byte(self) -> u8 {
        let mut b = self.size.min(MAX_BRUSH_SIZE);
        if self.shape == BrushShape::Square {
            b |= SQUARE_BIT;
        }
        if self.texture == BrushTexture::Spray {
            b |= SPRAY_BIT;
        }
        b
    }

    pub fn is_spray(self) -> bool {
        self.texture == BrushTexture::Spray
    }
}

impl fmt::Display for BrushType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} size {}",
            match self.texture {
                BrushTexture::Solid => "solid",
                BrushTexture::Spray => "spray",
            },
            match self.shape {
                BrushShape::Circle => "circle",
                BrushShape::Square => "square",
            },
            self.size
        )
    }
}

// Circle masks, one bit per pixel, MSB first.
// Each is size+1 columns wide and 2*size+1 rows tall.
static CIRCLE_0: [u8; 1] = [0x80];
static CIRCLE_1: [u8; 1] = [0xfc];
static CIRCLE_2: [u8; 2] = [0x5f, 0xf4];
static CIRCLE_3: [u8; 4] = [0x66, 0xff, 0xf6, 0x60];
static CIRCLE_4: [u8; 6] = [0x23, 0xbf, 0xff, 0xff, 0xee, 0x20];
static CIRCLE_5: [u8; 9] = [0x31, 0xe7, 0x9e, 0xff, 0xff, 0xde, 0x79, 0xe3, 0x00];
static CIRCLE_6: [u8; 12] = [
    0x38, 0xf9, 0xf3, 0xef, 0xff, 0xff, 0xff, 0xfe, 0xf9, 0xf3, 0xe3, 0x80,
];
static CIRCLE_7: [u8; 15] = [
    0x18, 0x3c, 0x7e, 0x7e, 0x7e, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7e, 0x7e, 0x7e, 0x3c, 0x18,
];

static CIRCLES: [&[u8]; 8] = [
    &CIRCLE_0, &CIRCLE_1, &CIRCLE_2, &CIRCLE_3, &CIRCLE_4, &CIRCLE_5, &CIRCLE_6, &CIRCLE_7,
];

/// The spray texture: a 256 bit on/off map walked by the splatter cursor
#[rustfmt::skip]
static SPLATTER_MAP: [u8; 32] = [
    0x20, 0x94, 0x02, 0x24, 0x90, 0x82, 0xa4, 0xa2,
    0x82, 0x09, 0x0a, 0x22, 0x12, 0x10, 0x42, 0x14,
    0x91, 0x4a, 0x91, 0x11, 0x08, 0x12, 0x25, 0x10,
    0x22, 0xa8, 0x14, 0x24, 0x00, 0x50, 0x24, 0x04,
];

/// Starting bit in the splatter map for each pattern number
#[rustfmt::skip]
static SPLATTER_START: [u8; 128] = [
    0x00, 0x18, 0x30, 0xc4, 0xdc, 0x65, 0xeb, 0x48,
    0x60, 0xbd, 0x89, 0x05, 0x0a, 0xf4, 0x7d, 0x7d,
    0x85, 0xb0, 0x8e, 0x95, 0x1f, 0x22, 0x0d, 0xdf,
    0x2a, 0x78, 0xd5, 0x73, 0x1c, 0xb4, 0x40, 0xa1,
    0xb9, 0x3c, 0xca, 0x58, 0x92, 0x34, 0xcc, 0xce,
    0xd7, 0x42, 0x90, 0x0f, 0x8b, 0x7f, 0x32, 0xed,
    0x5c, 0x9d, 0xc8, 0x99, 0xad, 0x4e, 0x56, 0xa6,
    0xf7, 0x68, 0xb7, 0x25, 0x82, 0x37, 0x3a, 0x51,
    0x69, 0x26, 0x38, 0x52, 0x9e, 0x9a, 0x4f, 0xa7,
    0x43, 0x10, 0x80, 0xee, 0x3d, 0x59, 0x35, 0xcf,
    0x79, 0x74, 0xb5, 0xa2, 0xb1, 0x96, 0x23, 0xe0,
    0xbe, 0x05, 0xf5, 0x6e, 0x19, 0xc5, 0x66, 0x49,
    0xf0, 0xd1, 0x54, 0xa9, 0x70, 0x4b, 0xa4, 0xe2,
    0xe6, 0xe5, 0xab, 0xe4, 0xd2, 0xaa, 0x4c, 0xe3,
    0x06, 0x6f, 0xc6, 0x4a, 0xa4, 0x75, 0x97, 0xe1,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Position in the splatter map.
///
/// Each spray stamp starts a new cursor from its pattern byte. The cursor
/// advances once per pixel the brush shape covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplatterCursor {
    bit: u8,
}

impl SplatterCursor {
    pub fn from_pattern(pattern: u8) -> SplatterCursor {
        SplatterCursor {
            bit: SPLATTER_START[((pattern >> 1) & 0x7f) as usize],
        }
    }

    /// Get the next on/off value and advance the cursor
    pub fn next_bit(&mut self) -> bool {
        let on = (SPLATTER_MAP[(self.bit >> 3) as usize] >> (7 - (self.bit & 7))) & 1 != 0;
        self.bit += 1;
        if self.bit == 0xff {
            self.bit = 0;
        }
        on
    }
}

fn circle_bit(size: u8, row: i32, col: i32) -> bool {
    let mask = CIRCLES[size as usize];
    let bit = (row * (size as i32 + 1) + col) as usize;
    (mask[bit >> 3] >> (7 - (bit & 7))) & 1 != 0
}

/// Stamp a brush centered (roughly) at the given point.
///
/// The footprint is clamped to lie fully inside the canvas. On the wide
/// canvas each brush column covers two pixels. A spray brush needs a
/// splatter cursor; solid brushes ignore it.
pub fn stamp<F>(
    brush: BrushType,
    center: Point,
    resolution: Resolution,
    mut splatter: Option<&mut SplatterCursor>,
    mut plot: F,
) where
    F: FnMut(i32, i32),
{
    let size = brush.size.min(MAX_BRUSH_SIZE);
    let s = size as i32;
    let doublet = resolution.brush_doublet();
    let logical_width = resolution.width() / doublet;

    let left = ((center.x / doublet * 2 - s).max(0) / 2).min(logical_width - 1 - s);
    let top = (center.y - s).clamp(0, resolution.height() - 1 - 2 * s);

    for row in 0..(2 * s + 1) {
        for col in 0..(s + 1) {
            if brush.shape == BrushShape::Circle && !circle_bit(size, row, col) {
                continue;
            }

            if brush.is_spray() {
                let on = match splatter.as_deref_mut() {
                    Some(cursor) => cursor.next_bit(),
                    None => true,
                };
                if !on {
                    continue;
                }
            }

            let x = (left + col) * doublet;
            for dx in 0..doublet {
                plot(x + dx, top + row);
            }
        }
    }
}

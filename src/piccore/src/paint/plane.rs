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

use super::palette;
use super::rect::{Rectangle, Resolution};

/// One indexed color raster (either the visual or the priority screen)
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RasterPlane {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
    blank: u8,
}

impl RasterPlane {
    pub fn new(width: usize, height: usize, blank: u8) -> RasterPlane {
        RasterPlane {
            pixels: vec![blank; width * height],
            width,
            height,
            blank,
        }
    }

    pub fn visual(resolution: Resolution) -> RasterPlane {
        Self::new(
            resolution.width() as usize,
            resolution.height() as usize,
            resolution.visual_blank(),
        )
    }

    pub fn priority(resolution: Resolution) -> RasterPlane {
        Self::new(
            resolution.width() as usize,
            resolution.height() as usize,
            resolution.priority_blank(),
        )
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The value of pixels nothing has been drawn on
    pub fn blank(&self) -> u8 {
        self.blank
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            None
        } else {
            Some(y as usize * self.width + x as usize)
        }
    }

    pub fn pixel_at(&self, x: i32, y: i32) -> Option<u8> {
        self.offset(x, y).map(|i| self.pixels[i])
    }

    /// Is this pixel on the plane and still untouched?
    pub fn is_blank_at(&self, x: i32, y: i32) -> bool {
        self.pixel_at(x, y) == Some(self.blank)
    }

    /// Set a pixel. Coordinates outside the plane are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u8) {
        if let Some(i) = self.offset(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn clear(&mut self) {
        let blank = self.blank;
        self.pixels.iter_mut().for_each(|p| *p = blank);
    }

    pub fn count(&self, color: u8) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    /// Find the bounding rectangle of everything drawn on this plane.
    /// If the plane is entirely blank, None is returned.
    pub fn drawn_bounds(&self) -> Option<Rectangle> {
        let mut top = self.height;
        let mut btm = 0;
        let mut left = self.width;
        let mut right = 0;

        for y in 0..self.height {
            let row = y * self.width;
            for (x, px) in self.pixels[row..row + self.width].iter().enumerate() {
                if *px != self.blank {
                    left = left.min(x);
                    right = right.max(x);
                    top = top.min(y);
                    btm = btm.max(y);
                }
            }
        }

        if top > btm {
            return None;
        }

        Some(Rectangle::new(
            left as i32,
            top as i32,
            (right - left + 1) as i32,
            (btm - top + 1) as i32,
        ))
    }

    /// Convert to RGBA bytes.
    ///
    /// When `blank_transparent` is set, untouched pixels use the transparent
    /// sentinel so the plane can be layered over something else.
    pub fn to_rgba(&self, blank_transparent: bool) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for &p in self.pixels.iter() {
            let index = if blank_transparent && p == self.blank {
                palette::TRANSPARENT
            } else {
                p
            };
            out.extend_from_slice(&palette::rgba(index));
        }
        out
    }
}

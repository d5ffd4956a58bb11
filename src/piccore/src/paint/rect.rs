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

use core::cmp::min;

/// Largest coordinate that can be stored in a data byte.
/// Anything from 0xF0 up would be read back as an action.
pub const MAX_COORDINATE: i32 = 0xEF;

#[derive(Eq, PartialEq, Debug, Clone, Copy, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Point {
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Rectangle {
        assert!(w > 0 && h > 0);
        Rectangle { x, y, w, h }
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && x <= self.right() && y <= self.bottom()
    }

    pub fn right(&self) -> i32 {
        self.x + self.w - 1
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h - 1
    }
}

/// Canvas resolution of a picture. Chosen when the document is created.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum Resolution {
    /// 160x168, every pixel is shown twice as wide as it is tall
    #[default]
    Legacy,
    /// 320x190 with square pixels
    Wide,
}

impl Resolution {
    pub fn width(self) -> i32 {
        match self {
            Resolution::Legacy => 160,
            Resolution::Wide => 320,
        }
    }

    pub fn height(self) -> i32 {
        match self {
            Resolution::Legacy => 168,
            Resolution::Wide => 190,
        }
    }

    pub fn bounds(self) -> Rectangle {
        Rectangle::new(0, 0, self.width(), self.height())
    }

    /// The value an untouched visual pixel has
    pub fn visual_blank(self) -> u8 {
        15
    }

    /// The value an untouched priority pixel has
    pub fn priority_blank(self) -> u8 {
        match self {
            Resolution::Legacy => 4,
            Resolution::Wide => 0,
        }
    }

    /// How many display pixels wide one canvas pixel is
    pub fn display_scale_x(self) -> u32 {
        match self {
            Resolution::Legacy => 2,
            Resolution::Wide => 1,
        }
    }

    /// How many canvas pixels one brush column covers.
    ///
    /// Brush footprints are defined in units of the 320 pixel wide display,
    /// so on the wide canvas every brush pixel is a horizontal pair.
    pub fn brush_doublet(self) -> i32 {
        match self {
            Resolution::Legacy => 1,
            Resolution::Wide => 2,
        }
    }

    pub fn contains(self, x: i32, y: i32) -> bool {
        self.bounds().contains_point(x, y)
    }

    /// Clamp a point to the area that is both on the canvas and
    /// representable as a data byte.
    pub fn clamp(self, p: Point) -> Point {
        Point {
            x: p.x.clamp(0, min(self.width() - 1, MAX_COORDINATE)),
            y: p.y.clamp(0, min(self.height() - 1, MAX_COORDINATE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let r = Resolution::Legacy;
        assert!(r.contains(0, 0));
        assert!(r.contains(159, 167));
        assert!(!r.contains(160, 0));
        assert!(!r.contains(0, -1));
        assert!(Resolution::Wide.contains(319, 189));
    }

    #[test]
    fn test_clamp() {
        let legacy = Resolution::Legacy;
        assert_eq!(legacy.clamp(Point::new(-5, 500)), Point::new(0, 167));
        assert_eq!(legacy.clamp(Point::new(200, 10)), Point::new(159, 10));

        // The wide canvas is limited by what fits in a data byte
        let wide = Resolution::Wide;
        assert_eq!(wide.clamp(Point::new(300, 189)), Point::new(0xEF, 189));
    }

    #[test]
    fn test_blank_values() {
        assert_eq!(Resolution::Legacy.visual_blank(), 15);
        assert_eq!(Resolution::Legacy.priority_blank(), 4);
        assert_eq!(Resolution::Wide.priority_blank(), 0);
    }
}

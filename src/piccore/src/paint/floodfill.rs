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

use super::plane::RasterPlane;

/// Fill the 4-connected blank region around the seed point.
///
/// Only pixels still at the plane's blank value are filled. Filling with
/// the blank color itself, or from a seed that is already drawn on, does
/// nothing. Returns the number of pixels filled.
pub fn flood_fill(plane: &mut RasterPlane, x: i32, y: i32, color: u8) -> usize {
    if color == plane.blank() || !plane.is_blank_at(x, y) {
        return 0;
    }

    let height = plane.height() as i32;
    let mut stack = vec![(x, y)];
    let mut filled_size = 0;

    while let Some((x, mut y)) = stack.pop() {
        let mut span_left = false;
        let mut span_right = false;

        while y >= 0 && plane.is_blank_at(x, y) {
            y -= 1;
        }
        y += 1;

        while y < height && plane.is_blank_at(x, y) {
            plane.set_pixel(x, y, color);
            filled_size += 1;

            let left = plane.is_blank_at(x - 1, y);
            if !span_left && left {
                stack.push((x - 1, y));
                span_left = true;
            } else if span_left && !left {
                span_left = false;
            }

            let right = plane.is_blank_at(x + 1, y);
            if !span_right && right {
                stack.push((x + 1, y));
                span_right = true;
            } else if span_right && !right {
                span_right = false;
            }

            y += 1;
        }
    }

    filled_size
}

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

use super::rect::Point;

/// Rasterize a line between two points, calling `plot` for every pixel.
///
/// The endpoints are ordered along the dominant axis before stepping, so
/// a line and its reverse always cover the same pixels.
pub fn draw_line<F>(from: Point, to: Point, mut plot: F)
where
    F: FnMut(i32, i32),
{
    if from.x == to.x {
        let (y0, y1) = if from.y <= to.y {
            (from.y, to.y)
        } else {
            (to.y, from.y)
        };
        for y in y0..=y1 {
            plot(from.x, y);
        }
        return;
    }

    if from.y == to.y {
        let (x0, x1) = if from.x <= to.x {
            (from.x, to.x)
        } else {
            (to.x, from.x)
        };
        for x in x0..=x1 {
            plot(x, from.y);
        }
        return;
    }

    let dx = (to.x - from.x).abs();
    let dy = (to.y - from.y).abs();

    let (start, end) = if (dy > dx && from.y > to.y) || (dy <= dx && from.x > to.x) {
        (to, from)
    } else {
        (from, to)
    };

    let stepx = if end.x < start.x { -1 } else { 1 };
    let stepy = if end.y < start.y { -1 } else { 1 };

    let (count, det, mut err_x, mut err_y) = if dy > dx {
        (dy, dy, dy / 2, 0)
    } else {
        (dx, dx, 0, dx / 2)
    };

    let mut x = start.x;
    let mut y = start.y;
    plot(x, y);

    for _ in 0..count {
        err_y += dy;
        if err_y >= det {
            err_y -= det;
            y += stepy;
        }

        err_x += dx;
        if err_x >= det {
            err_x -= det;
            x += stepx;
        }

        plot(x, y);
    }
}

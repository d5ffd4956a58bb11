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

use super::GestureEncoder;
use crate::paint::Point;
use crate::protocol::{Action, Axis, CodeWriter};

/// Draws lines that alternate between horizontal and vertical segments.
///
/// The first click only picks the starting point. The second click decides
/// which axis moves first, based on which way the pointer moved further.
/// After that every click moves along the other axis than the previous one.
/// A new activation after a right click continues from the last endpoint.
#[derive(Debug)]
pub struct StepLineTool {
    clicks: u32,
    prev: Option<Point>,
    open: bool,
    next_axis: Axis,
}

/// The axis along which the pointer moved further. Ties go vertical.
fn dominant_axis(from: Point, to: Point) -> Axis {
    if (to.x - from.x).abs() > (to.y - from.y).abs() {
        Axis::X
    } else {
        Axis::Y
    }
}

impl StepLineTool {
    pub fn new() -> StepLineTool {
        StepLineTool {
            clicks: 0,
            prev: None,
            open: false,
            next_axis: Axis::Y,
        }
    }

    /// Write the opcode and starting point, then the first step towards `p`
    fn start_line(&mut self, start: Point, p: Point, writer: &mut CodeWriter) {
        self.next_axis = dominant_axis(start, p);
        writer.write_action(match self.next_axis {
            Axis::X => Action::StepLineHorizontal,
            Axis::Y => Action::StepLineVertical,
        });
        writer.write_point(start);
        self.open = true;
        self.step(start, p, writer);
    }

    fn step(&mut self, from: Point, p: Point, writer: &mut CodeWriter) {
        let mut end = from;
        match self.next_axis {
            Axis::X => {
                writer.write_byte(p.x as u8);
                end.x = p.x;
            }
            Axis::Y => {
                writer.write_byte(p.y as u8);
                end.y = p.y;
            }
        }
        self.prev = Some(end);
        self.next_axis = self.next_axis.other();
    }
}

impl Default for StepLineTool {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureEncoder for StepLineTool {
    fn click(&mut self, p: Point, writer: &mut CodeWriter) {
        match self.prev {
            None => self.prev = Some(p),
            Some(start) if !self.open => self.start_line(start, p, writer),
            Some(end) => self.step(end, p, writer),
        }
        self.clicks += 1;
    }

    /// A right click adds one last step along whichever axis the pointer
    /// moved further. Steps alternate strictly, so reaching the other
    /// axis takes an empty step first.
    fn finish(&mut self, p: Point, writer: &mut CodeWriter) {
        let end = match self.prev {
            Some(end) if end != p => end,
            _ => return,
        };

        if !self.open {
            self.start_line(end, p, writer);
            return;
        }

        let axis = dominant_axis(end, p);
        if axis != self.next_axis {
            self.step(end, end, writer);
        }
        self.step(end, p, writer);
    }

    fn clicks(&self) -> u32 {
        self.clicks
    }

    fn reset(&mut self) {
        self.clicks = 0;
        self.open = false;
    }

    fn clear(&mut self) {
        self.reset();
        self.prev = None;
    }
}

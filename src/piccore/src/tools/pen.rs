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
use crate::protocol::opcode::{encode_relative, MAX_RELATIVE_DX, MAX_RELATIVE_DY};
use crate::protocol::{Action, CodeWriter};

/// Draws short lines made of small relative steps.
///
/// Each click moves at most one step from the previous point: longer
/// movements are cut short. After a right click the next click starts a
/// new short line at the point the previous one ended.
#[derive(Debug, Default)]
pub struct PenTool {
    clicks: u32,
    prev: Option<Point>,
}

impl PenTool {
    pub fn new() -> PenTool {
        Self::default()
    }

    fn step(&mut self, from: Point, p: Point, writer: &mut CodeWriter) {
        let dx = (p.x - from.x).clamp(-MAX_RELATIVE_DX, MAX_RELATIVE_DX);
        let dy = (p.y - from.y).clamp(-MAX_RELATIVE_DY, MAX_RELATIVE_DY);
        writer.write_byte(encode_relative(dx, dy));
        self.prev = Some(from.offset(dx, dy));
    }
}

impl GestureEncoder for PenTool {
    fn click(&mut self, p: Point, writer: &mut CodeWriter) {
        match (self.clicks, self.prev) {
            (0, None) => {
                writer.write_action(Action::ShortLine);
                writer.write_point(p);
                self.prev = Some(p);
            }
            (0, Some(end)) => {
                writer.write_action(Action::ShortLine);
                writer.write_point(end);
                if p != end {
                    self.step(end, p, writer);
                }
            }
            (_, prev) => self.step(prev.unwrap_or(p), p, writer),
        }
        self.clicks += 1;
    }

    fn clicks(&self) -> u32 {
        self.clicks
    }

    fn reset(&mut self) {
        self.clicks = 0;
    }

    fn clear(&mut self) {
        self.clicks = 0;
        self.prev = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::opcode::decode_relative;

    fn click_all(tool: &mut PenTool, points: &[(i32, i32)]) -> Vec<u8> {
        let mut writer = CodeWriter::new();
        for &(x, y) in points {
            tool.click(Point::new(x, y), &mut writer);
        }
        writer.into()
    }

    #[test]
    fn test_pen_clamps_steps() {
        let mut tool = PenTool::new();
        let bytes = click_all(&mut tool, &[(10, 10), (30, 13), (0, 0)]);

        assert_eq!(&bytes[..3], &[0xF7, 10, 10]);
        assert_eq!(decode_relative(bytes[3]), (6, 3));
        assert_eq!(decode_relative(bytes[4]), (-6, -7));
        assert_eq!(tool.prev, Some(Point::new(10, 6)));
    }

    #[test]
    fn test_continues_after_reset() {
        let mut tool = PenTool::new();
        click_all(&mut tool, &[(10, 10), (30, 13)]);
        tool.reset();

        // the new short line starts where the clamped step ended
        let bytes = click_all(&mut tool, &[(20, 20)]);
        assert_eq!(&bytes[..3], &[0xF7, 16, 13]);
        assert_eq!(decode_relative(bytes[3]), (4, 7));
        assert_eq!(tool.clicks(), 1);

        tool.clear();
        assert_eq!(click_all(&mut tool, &[(5, 5)]), vec![0xF7, 5, 5]);
    }
}

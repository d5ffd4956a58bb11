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
use crate::protocol::{Action, CodeWriter};

/// Places fill seeds
#[derive(Debug, Default)]
pub struct FillTool {
    clicks: u32,
}

impl FillTool {
    pub fn new() -> FillTool {
        Self::default()
    }
}

impl GestureEncoder for FillTool {
    fn click(&mut self, p: Point, writer: &mut CodeWriter) {
        if self.clicks == 0 {
            writer.write_action(Action::Fill);
        }
        writer.write_point(p);
        self.clicks += 1;
    }

    fn clicks(&self) -> u32 {
        self.clicks
    }

    fn reset(&mut self) {
        self.clicks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_tool() {
        let mut tool = FillTool::new();
        let mut writer = CodeWriter::new();
        tool.click(Point::new(10, 20), &mut writer);
        tool.click(Point::new(30, 40), &mut writer);
        let bytes: Vec<u8> = writer.into();
        assert_eq!(bytes, vec![0xF8, 10, 20, 30, 40]);
        assert_eq!(tool.clicks(), 2);
    }
}

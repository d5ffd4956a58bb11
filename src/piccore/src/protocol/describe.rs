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

use super::opcode::{decode_relative, Axis, Code, Kind};
use crate::paint::{palette, BrushType};

use std::fmt;

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.value();
        match self.kind() {
            Kind::Action(a) => write!(f, "{}", a.name()),
            Kind::ColorData => {
                let c = v & 0x0f;
                write!(f, "  Color {} ({})", c, palette::color_name(c))
            }
            Kind::AbsolutePointData(Axis::X) | Kind::FillPointData(Axis::X) => {
                write!(f, "  X {}", v)
            }
            Kind::AbsolutePointData(Axis::Y) | Kind::FillPointData(Axis::Y) => {
                write!(f, "  Y {}", v)
            }
            Kind::RelativePointData => match decode_relative(v) {
                (dx, 0) => write!(f, "  Move X {:+}", dx),
                (0, dy) => write!(f, "  Move Y {:+}", dy),
                (dx, dy) => write!(f, "  Move {:+}, {:+}", dx, dy),
            },
            Kind::XPositionData => write!(f, "  Step X {}", v),
            Kind::YPositionData => write!(f, "  Step Y {}", v),
            Kind::BrushPatternData => write!(f, "  Pattern {}", v >> 1),
            Kind::BrushTypeData => write!(f, "  Brush {}", BrushType::from_byte(v)),
        }
    }
}

/// Human readable description of every row of a code sequence,
/// including the Start and End rows.
pub fn listing(codes: &[Code]) -> Vec<String> {
    let mut rows = Vec::with_capacity(codes.len() + 2);
    rows.push("Start".to_string());
    rows.extend(codes.iter().map(|c| c.to_string()));
    rows.push("End".to_string());
    rows
}

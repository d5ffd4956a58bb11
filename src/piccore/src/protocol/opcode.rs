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

use num_enum::IntoPrimitive;
use num_enum::TryFromPrimitive;

/// Bytes from this value up always start a new action
pub const ACTION_MIN: u8 = 0xF0;

/// Largest relative step that can be encoded without the byte
/// colliding with the action range (0xF7 would be a ShortLine.)
pub const MAX_RELATIVE_DX: i32 = 6;
pub const MAX_RELATIVE_DY: i32 = 7;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Action {
    SetVisualColor = 0xF0,
    VisualOff = 0xF1,
    SetPriorityColor = 0xF2,
    PriorityOff = 0xF3,
    StepLineVertical = 0xF4,
    StepLineHorizontal = 0xF5,
    AbsoluteLine = 0xF6,
    ShortLine = 0xF7,
    Fill = 0xF8,
    SetBrushType = 0xF9,
    PlotBrush = 0xFA,
    End = 0xFF,
}

impl Action {
    pub fn name(self) -> &'static str {
        match self {
            Action::SetVisualColor => "Set visual color",
            Action::VisualOff => "Visual off",
            Action::SetPriorityColor => "Set priority color",
            Action::PriorityOff => "Priority off",
            Action::StepLineVertical => "Step line (Y first)",
            Action::StepLineHorizontal => "Step line (X first)",
            Action::AbsoluteLine => "Absolute line",
            Action::ShortLine => "Short line",
            Action::Fill => "Fill",
            Action::SetBrushType => "Set brush type",
            Action::PlotBrush => "Plot brush",
            Action::End => "End",
        }
    }

    /// Does this action draw a polyline?
    pub fn is_line(self) -> bool {
        matches!(
            self,
            Action::StepLineVertical
                | Action::StepLineHorizontal
                | Action::AbsoluteLine
                | Action::ShortLine
        )
    }
}

pub fn is_action_byte(b: u8) -> bool {
    b >= ACTION_MIN
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// The role of a byte in the stream
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Action(Action),
    ColorData,
    /// One half of an absolute vertex or brush position
    AbsolutePointData(Axis),
    /// A short line vertex, packed signed deltas
    RelativePointData,
    /// One half of a fill seed
    FillPointData(Axis),
    XPositionData,
    YPositionData,
    BrushPatternData,
    BrushTypeData,
}

impl Kind {
    pub fn is_action(self) -> bool {
        matches!(self, Kind::Action(_))
    }

    pub fn action(self) -> Option<Action> {
        match self {
            Kind::Action(a) => Some(a),
            _ => None,
        }
    }
}

/// A classified byte
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Code {
    value: u8,
    kind: Kind,
}

impl Code {
    pub fn new(value: u8, kind: Kind) -> Code {
        debug_assert!(kind.is_action() == is_action_byte(value));
        Code { value, kind }
    }

    pub fn action(action: Action) -> Code {
        Code {
            value: action.into(),
            kind: Kind::Action(action),
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn is_action(&self) -> bool {
        self.kind.is_action()
    }

    pub fn as_action(&self) -> Option<Action> {
        self.kind.action()
    }
}

/// Unpack a relative point byte into (dx, dy)
pub fn decode_relative(b: u8) -> (i32, i32) {
    let dx = ((b >> 4) & 0x07) as i32;
    let dy = (b & 0x07) as i32;
    (
        if b & 0x80 != 0 { -dx } else { dx },
        if b & 0x08 != 0 { -dy } else { dy },
    )
}

/// Pack a relative step into a single byte.
/// The deltas are clamped to what the byte can hold.
pub fn encode_relative(dx: i32, dy: i32) -> u8 {
    let dx = dx.clamp(-MAX_RELATIVE_DX, MAX_RELATIVE_DX);
    let dy = dy.clamp(-MAX_RELATIVE_DY, MAX_RELATIVE_DY);

    let mut b = ((dx.unsigned_abs() as u8) << 4) | dy.unsigned_abs() as u8;
    if dx < 0 {
        b |= 0x80;
    }
    if dy < 0 {
        b |= 0x08;
    }
    b
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    #[test]
    fn test_action_bytes() {
        assert_eq!(Action::try_from(0xF6).ok(), Some(Action::AbsoluteLine));
        assert_eq!(u8::from(Action::End), 0xFF);
        assert!(Action::try_from(0xFB).is_err());
        assert!(Action::try_from(0x10).is_err());
        assert!(is_action_byte(0xF0));
        assert!(!is_action_byte(0xEF));
    }

    #[test]
    fn test_relative() {
        assert_eq!(decode_relative(0x63), (6, 3));
        assert_eq!(decode_relative(0xA9), (-2, -1));
        assert_eq!(decode_relative(0x00), (0, 0));

        assert_eq!(encode_relative(20, 3), 0x63);
        assert_eq!(encode_relative(-2, -1), 0xA9);
        assert_eq!(encode_relative(-9, -9), 0xEF);
        assert_eq!(encode_relative(0, 7), 0x07);

        for dx in -MAX_RELATIVE_DX..=MAX_RELATIVE_DX {
            for dy in -MAX_RELATIVE_DY..=MAX_RELATIVE_DY {
                let b = encode_relative(dx, dy);
                assert!(!is_action_byte(b));
                assert_eq!(decode_relative(b), (dx, dy));
            }
        }
    }
}

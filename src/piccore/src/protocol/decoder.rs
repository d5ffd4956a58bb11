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

use super::opcode::{is_action_byte, Action, Axis, Kind};
use crate::paint::BrushType;

use std::convert::TryFrom;

/// Which kind of vertex a pending point belongs to
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointKind {
    Absolute,
    Fill,
}

impl PointKind {
    fn data(self, axis: Axis) -> Kind {
        match self {
            PointKind::Absolute => Kind::AbsolutePointData(axis),
            PointKind::Fill => Kind::FillPointData(axis),
        }
    }
}

/// What the current action expects next
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Expect {
    /// No data allowed until the next action
    #[default]
    Idle,
    Color,
    BrushType,
    /// The X half of a point. Optional, unless it follows a brush pattern byte.
    X { kind: PointKind, after_pattern: bool },
    /// The Y half of a point
    Y { kind: PointKind },
    /// Any number of short line steps
    Relative,
    /// A step line coordinate for the given axis
    Step(Axis),
    /// A brush pattern byte, starting a new spray point
    Pattern,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClassifyError {
    /// A reserved byte in the action range
    UnknownOpcode,
    /// A data byte nothing consumes
    UnexpectedData,
    /// A required data byte is missing
    Truncated(Action),
}

/// Decoder state between two bytes.
///
/// Classification is a pure function of this state and the next byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct DecodeState {
    action: Option<Action>,
    expect: Expect,
    spray: bool,
}

impl DecodeState {
    pub fn new() -> DecodeState {
        Self::default()
    }

    /// The action whose data is currently being read
    pub fn action(&self) -> Option<Action> {
        self.action
    }

    pub fn expect(&self) -> Expect {
        self.expect
    }

    /// Does the most recent brush type have a spray texture?
    pub fn spray(&self) -> bool {
        self.spray
    }

    /// Is the current action missing a byte it cannot do without?
    pub fn is_pending(&self) -> bool {
        matches!(
            self.expect,
            Expect::Color
                | Expect::BrushType
                | Expect::Y { .. }
                | Expect::X {
                    after_pattern: true,
                    ..
                }
        )
    }

    /// Classify the next byte.
    ///
    /// An action byte arriving while a required data byte is still
    /// pending is an error.
    pub fn classify(&self, byte: u8) -> Result<(Kind, DecodeState), ClassifyError> {
        if is_action_byte(byte) && self.is_pending() {
            return Err(self.truncated());
        }
        self.transition(byte)
    }

    /// Classify the next byte, letting an action byte end any
    /// incomplete action instead of rejecting it.
    ///
    /// This is used when reading back sequences whose earlier parts
    /// may have been edited out from under them.
    pub fn resume(&self, byte: u8) -> Result<(Kind, DecodeState), ClassifyError> {
        self.transition(byte)
    }

    /// Check that the stream may end here
    pub fn finish(&self) -> Result<(), ClassifyError> {
        if self.is_pending() {
            Err(self.truncated())
        } else {
            Ok(())
        }
    }

    fn truncated(&self) -> ClassifyError {
        ClassifyError::Truncated(self.action.unwrap_or(Action::End))
    }

    fn transition(&self, byte: u8) -> Result<(Kind, DecodeState), ClassifyError> {
        if is_action_byte(byte) {
            let action = Action::try_from(byte).map_err(|_| ClassifyError::UnknownOpcode)?;
            let expect = match action {
                Action::SetVisualColor | Action::SetPriorityColor => Expect::Color,
                Action::VisualOff | Action::PriorityOff | Action::End => Expect::Idle,
                Action::StepLineVertical
                | Action::StepLineHorizontal
                | Action::AbsoluteLine
                | Action::ShortLine => Expect::X {
                    kind: PointKind::Absolute,
                    after_pattern: false,
                },
                Action::Fill => Expect::X {
                    kind: PointKind::Fill,
                    after_pattern: false,
                },
                Action::SetBrushType => Expect::BrushType,
                Action::PlotBrush => self.brush_point(),
            };

            return Ok((
                Kind::Action(action),
                DecodeState {
                    action: Some(action),
                    expect,
                    spray: self.spray,
                },
            ));
        }

        let (kind, next) = match self.expect {
            Expect::Idle => return Err(ClassifyError::UnexpectedData),
            Expect::Color => (Kind::ColorData, self.with(Expect::Idle)),
            Expect::BrushType => (
                Kind::BrushTypeData,
                DecodeState {
                    action: self.action,
                    expect: Expect::Idle,
                    spray: BrushType::from_byte(byte).is_spray(),
                },
            ),
            Expect::X { kind, .. } => (kind.data(Axis::X), self.with(Expect::Y { kind })),
            Expect::Y { kind } => (kind.data(Axis::Y), self.with(self.after_vertex())),
            Expect::Relative => (Kind::RelativePointData, *self),
            Expect::Step(Axis::X) => (Kind::XPositionData, self.with(Expect::Step(Axis::Y))),
            Expect::Step(Axis::Y) => (Kind::YPositionData, self.with(Expect::Step(Axis::X))),
            Expect::Pattern => (
                Kind::BrushPatternData,
                self.with(Expect::X {
                    kind: PointKind::Absolute,
                    after_pattern: true,
                }),
            ),
        };

        Ok((kind, next))
    }

    fn with(&self, expect: Expect) -> DecodeState {
        DecodeState { expect, ..*self }
    }

    fn brush_point(&self) -> Expect {
        if self.spray {
            Expect::Pattern
        } else {
            Expect::X {
                kind: PointKind::Absolute,
                after_pattern: false,
            }
        }
    }

    /// What comes after a complete absolute vertex
    fn after_vertex(&self) -> Expect {
        match self.action {
            Some(Action::AbsoluteLine) => Expect::X {
                kind: PointKind::Absolute,
                after_pattern: false,
            },
            Some(Action::ShortLine) => Expect::Relative,
            Some(Action::StepLineVertical) => Expect::Step(Axis::Y),
            Some(Action::StepLineHorizontal) => Expect::Step(Axis::X),
            Some(Action::Fill) => Expect::X {
                kind: PointKind::Fill,
                after_pattern: false,
            },
            Some(Action::PlotBrush) => self.brush_point(),
            _ => Expect::Idle,
        }
    }
}

/// Run a sequence of bytes through the lenient classifier and return
/// the state at the end. Bytes that cannot be classified at all are skipped.
pub fn scan_state<I>(bytes: I) -> DecodeState
where
    I: IntoIterator<Item = u8>,
{
    bytes.into_iter().fold(DecodeState::new(), |state, b| {
        state.resume(b).map(|(_, next)| next).unwrap_or(state)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(bytes: &[u8]) -> Result<Vec<Kind>, ClassifyError> {
        let mut state = DecodeState::new();
        let mut out = Vec::new();
        for &b in bytes {
            let (k, next) = state.classify(b)?;
            out.push(k);
            state = next;
        }
        state.finish()?;
        Ok(out)
    }

    #[test]
    fn test_color() {
        assert_eq!(
            kinds(&[0xF0, 0x04, 0xF1]).unwrap(),
            vec![
                Kind::Action(Action::SetVisualColor),
                Kind::ColorData,
                Kind::Action(Action::VisualOff)
            ]
        );
        assert_eq!(kinds(&[0xF0, 0x04, 0x05]), Err(ClassifyError::UnexpectedData));
        assert_eq!(
            kinds(&[0xF0, 0xF1]),
            Err(ClassifyError::Truncated(Action::SetVisualColor))
        );
        assert_eq!(kinds(&[0x10]), Err(ClassifyError::UnexpectedData));
        assert_eq!(kinds(&[0xFC]), Err(ClassifyError::UnknownOpcode));
    }

    #[test]
    fn test_absolute_line() {
        use Kind::AbsolutePointData as P;
        assert_eq!(
            kinds(&[0xF6, 1, 2, 3, 4, 5, 6]).unwrap(),
            vec![
                Kind::Action(Action::AbsoluteLine),
                P(Axis::X),
                P(Axis::Y),
                P(Axis::X),
                P(Axis::Y),
                P(Axis::X),
                P(Axis::Y)
            ]
        );
        // a vertex list may end after any whole vertex but not in the middle of one
        assert!(kinds(&[0xF6, 1, 2, 0xF1]).is_ok());
        assert!(kinds(&[0xF6, 0xF1]).is_ok());
        assert_eq!(
            kinds(&[0xF6, 1, 2, 3]),
            Err(ClassifyError::Truncated(Action::AbsoluteLine))
        );
    }

    #[test]
    fn test_step_lines() {
        let k = kinds(&[0xF4, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(&k[3..], &[Kind::YPositionData, Kind::XPositionData, Kind::YPositionData]);

        let k = kinds(&[0xF5, 1, 2, 3, 4]).unwrap();
        assert_eq!(&k[3..], &[Kind::XPositionData, Kind::YPositionData]);
    }

    #[test]
    fn test_short_line_and_fill() {
        let k = kinds(&[0xF7, 1, 2, 0x11, 0x99]).unwrap();
        assert_eq!(&k[3..], &[Kind::RelativePointData, Kind::RelativePointData]);

        let k = kinds(&[0xF8, 1, 2, 3, 4]).unwrap();
        assert_eq!(k[4], Kind::FillPointData(Axis::Y));
    }

    #[test]
    fn test_brush() {
        // solid brush: points only
        let k = kinds(&[0xF9, 0x02, 0xFA, 10, 20]).unwrap();
        assert_eq!(k[3], Kind::AbsolutePointData(Axis::X));

        // spray brush: a pattern byte before each point
        let k = kinds(&[0xF9, 0x22, 0xFA, 8, 10, 20, 4, 11, 21]).unwrap();
        assert_eq!(k[3], Kind::BrushPatternData);
        assert_eq!(k[6], Kind::BrushPatternData);
        assert_eq!(k[8], Kind::AbsolutePointData(Axis::Y));

        // the pattern byte requires a point
        assert_eq!(
            kinds(&[0xF9, 0x22, 0xFA, 8, 0xFF]),
            Err(ClassifyError::Truncated(Action::PlotBrush))
        );
        assert!(kinds(&[0xF9, 0x22, 0xFA, 0xFF]).is_ok());
    }

    #[test]
    fn test_resume_is_lenient() {
        let state = scan_state(vec![0xF6, 10]);
        assert!(state.is_pending());
        assert!(state.classify(0xF1).is_err());
        let (kind, next) = state.resume(0xF1).unwrap();
        assert_eq!(kind, Kind::Action(Action::VisualOff));
        assert!(!next.is_pending());
    }
}

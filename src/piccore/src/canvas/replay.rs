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

use crate::paint::brushmask::stamp;
use crate::paint::floodfill::flood_fill;
use crate::paint::line::draw_line;
use crate::paint::{BrushType, Point, RasterPlane, Resolution, SplatterCursor};
use crate::protocol::opcode::decode_relative;
use crate::protocol::{Action, Axis, Code, Kind};

use tracing::{debug, warn};

/// The visual and priority rasters of a picture
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Planes {
    pub visual: RasterPlane,
    pub priority: RasterPlane,
    resolution: Resolution,
}

impl Planes {
    pub fn new(resolution: Resolution) -> Planes {
        Planes {
            visual: RasterPlane::visual(resolution),
            priority: RasterPlane::priority(resolution),
            resolution,
        }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Set a pixel in whichever planes have a color
    pub fn plot(&mut self, x: i32, y: i32, visual: Option<u8>, priority: Option<u8>) {
        if let Some(c) = visual {
            self.visual.set_pixel(x, y, c);
        }
        if let Some(c) = priority {
            self.priority.set_pixel(x, y, c);
        }
    }
}

/// Drawing state accumulated while replaying
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawState {
    /// Visual drawing color, None if visual drawing is off
    pub visual: Option<u8>,
    /// Priority drawing color, None if priority drawing is off
    pub priority: Option<u8>,
    pub brush: BrushType,
    /// The last vertex or point drawn
    pub last_point: Option<Point>,
}

/// Executes codes onto a pair of planes
pub struct Replay {
    planes: Planes,
    state: DrawState,
}

impl Replay {
    pub fn new(resolution: Resolution) -> Replay {
        Replay {
            planes: Planes::new(resolution),
            state: DrawState::default(),
        }
    }

    pub fn planes(&self) -> &Planes {
        &self.planes
    }

    pub fn state(&self) -> &DrawState {
        &self.state
    }

    pub fn into_planes(self) -> Planes {
        self.planes
    }

    /// Execute a run of codes.
    ///
    /// Incomplete actions are drawn as far as they go. Data codes
    /// with no action before them are skipped.
    pub fn run(&mut self, codes: &[Code]) {
        let mut rest = codes;
        let mut groups = 0;

        while !rest.is_empty() {
            let len = 1 + rest[1..].iter().take_while(|c| !c.is_action()).count();
            let (group, tail) = rest.split_at(len);
            rest = tail;

            match group[0].as_action() {
                Some(action) => {
                    self.execute(action, &group[1..], rest.is_empty());
                    groups += 1;
                }
                None => warn!("Skipping {} data codes with no action", group.len()),
            }
        }

        debug!("Replayed {} actions ({} codes)", groups, codes.len());
    }

    fn execute(&mut self, action: Action, data: &[Code], last: bool) {
        let complete = match action {
            Action::SetVisualColor => match data.first() {
                Some(c) => {
                    self.state.visual = Some(c.value() & 0x0f);
                    true
                }
                None => false,
            },
            Action::VisualOff => {
                self.state.visual = None;
                true
            }
            Action::SetPriorityColor => match data.first() {
                Some(c) => {
                    self.state.priority = Some(c.value() & 0x0f);
                    true
                }
                None => false,
            },
            Action::PriorityOff => {
                self.state.priority = None;
                true
            }
            Action::SetBrushType => match data.first() {
                Some(c) => {
                    self.state.brush = BrushType::from_byte(c.value());
                    true
                }
                None => false,
            },
            Action::AbsoluteLine
            | Action::ShortLine
            | Action::StepLineVertical
            | Action::StepLineHorizontal => self.polyline(data),
            Action::Fill => self.fill(data),
            Action::PlotBrush => self.plot_brush(data),
            Action::End => true,
        };

        if !complete {
            if last {
                debug!("{} is still incomplete", action.name());
            } else {
                warn!("Ignoring incomplete {}", action.name());
            }
        }
    }

    fn clamp(&self, x: i32, y: i32) -> Point {
        self.planes.resolution.clamp(Point::new(x, y))
    }

    /// Draw a line through all vertices. Returns false if a vertex was cut short.
    fn polyline(&mut self, data: &[Code]) -> bool {
        let mut prev: Option<Point> = None;
        let mut pending_x: Option<i32> = None;

        for code in data {
            let v = code.value() as i32;
            let next = match (code.kind(), prev) {
                (Kind::AbsolutePointData(Axis::X), _) => {
                    pending_x = Some(v);
                    None
                }
                (Kind::AbsolutePointData(Axis::Y), _) => pending_x.take().map(|x| self.clamp(x, v)),
                (Kind::RelativePointData, Some(p)) => {
                    let (dx, dy) = decode_relative(code.value());
                    Some(self.clamp(p.x + dx, p.y + dy))
                }
                (Kind::XPositionData, Some(p)) => Some(self.clamp(v, p.y)),
                (Kind::YPositionData, Some(p)) => Some(self.clamp(p.x, v)),
                _ => None,
            };

            if let Some(p) = next {
                if let Some(from) = prev {
                    let (visual, priority) = (self.state.visual, self.state.priority);
                    let planes = &mut self.planes;
                    draw_line(from, p, |x, y| planes.plot(x, y, visual, priority));
                }
                prev = Some(p);
                self.state.last_point = Some(p);
            }
        }

        pending_x.is_none()
    }

    fn fill(&mut self, data: &[Code]) -> bool {
        let mut pending_x: Option<i32> = None;

        for code in data {
            match code.kind() {
                Kind::FillPointData(Axis::X) => pending_x = Some(code.value() as i32),
                Kind::FillPointData(Axis::Y) => {
                    if let Some(x) = pending_x.take() {
                        let seed = self.clamp(x, code.value() as i32);
                        if let Some(c) = self.state.visual {
                            flood_fill(&mut self.planes.visual, seed.x, seed.y, c);
                        }
                        if let Some(c) = self.state.priority {
                            flood_fill(&mut self.planes.priority, seed.x, seed.y, c);
                        }
                        self.state.last_point = Some(seed);
                    }
                }
                _ => (),
            }
        }

        pending_x.is_none()
    }

    fn plot_brush(&mut self, data: &[Code]) -> bool {
        let mut pending_x: Option<i32> = None;
        let mut splatter: Option<SplatterCursor> = None;

        for code in data {
            match code.kind() {
                Kind::BrushPatternData => {
                    splatter = Some(SplatterCursor::from_pattern(code.value()));
                    pending_x = None;
                }
                Kind::AbsolutePointData(Axis::X) => pending_x = Some(code.value() as i32),
                Kind::AbsolutePointData(Axis::Y) => {
                    if let Some(x) = pending_x.take() {
                        let center = self.clamp(x, code.value() as i32);
                        let (visual, priority) = (self.state.visual, self.state.priority);
                        let planes = &mut self.planes;
                        let cursor = if self.state.brush.is_spray() {
                            splatter.as_mut()
                        } else {
                            None
                        };
                        stamp(
                            self.state.brush,
                            center,
                            planes.resolution,
                            cursor,
                            |x, y| planes.plot(x, y, visual, priority),
                        );
                        self.state.last_point = Some(center);
                        splatter = None;
                    }
                }
                _ => (),
            }
        }

        pending_x.is_none() && splatter.is_none()
    }
}

/// Replay a picture from the beginning up to (not including) the given row
pub fn render(codes: &[Code], upto: usize, resolution: Resolution) -> Planes {
    let count = upto.saturating_sub(1).min(codes.len());
    let mut replay = Replay::new(resolution);
    replay.run(&codes[..count]);
    replay.into_planes()
}

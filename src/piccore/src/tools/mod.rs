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


mod brush;
mod fill;
mod line;
mod pen;
mod stepline;
mod toolbox;

pub use brush::{BrushTool, PatternSource, RandomPatterns};
pub use fill::FillTool;
pub use line::LineTool;
pub use pen::PenTool;
pub use stepline::StepLineTool;
pub use toolbox::ToolBox;

use crate::paint::Point;
use crate::protocol::CodeWriter;

use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ToolKind {
    Line,
    Pen,
    StepLine,
    Fill,
    Brush,
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ToolKind::Line => "line",
            ToolKind::Pen => "pen",
            ToolKind::StepLine => "step line",
            ToolKind::Fill => "fill",
            ToolKind::Brush => "brush",
        })
    }
}

/// Turns pointer clicks into picture codes
pub trait GestureEncoder {
    /// Encode a click at the given canvas point.
    ///
    /// The point must already be clamped to the canvas. Whatever the
    /// click produces is written to the writer; a click may produce nothing.
    fn click(&mut self, p: Point, writer: &mut CodeWriter);

    /// Number of clicks since the tool was activated
    fn clicks(&self) -> u32;

    /// Finish the current activation with a right click at the given point.
    /// Called before `reset`; most tools have nothing left to write.
    fn finish(&mut self, _p: Point, _writer: &mut CodeWriter) {}

    /// Start a new activation. Codes already written are not affected.
    ///
    /// Tools that draw connected lines keep their endpoint, so the next
    /// activation continues from where the previous one stopped.
    fn reset(&mut self);

    /// Start over completely, forgetting any endpoint as well
    fn clear(&mut self) {
        self.reset();
    }
}

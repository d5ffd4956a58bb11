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

use super::{
    BrushTool, FillTool, GestureEncoder, LineTool, PatternSource, PenTool, StepLineTool, ToolKind,
};
use crate::paint::{BrushType, Point, Resolution};
use crate::protocol::CodeWriter;

use tracing::debug;

/// All drawing tools and which one of them is active
pub struct ToolBox {
    resolution: Resolution,
    line: LineTool,
    pen: PenTool,
    stepline: StepLineTool,
    fill: FillTool,
    brush: BrushTool,
    active: Option<ToolKind>,
}

impl ToolBox {
    pub fn new(resolution: Resolution) -> ToolBox {
        ToolBox {
            resolution,
            line: LineTool::new(),
            pen: PenTool::new(),
            stepline: StepLineTool::new(),
            fill: FillTool::new(),
            brush: BrushTool::new(),
            active: None,
        }
    }

    pub fn active(&self) -> Option<ToolKind> {
        self.active
    }

    /// Select a tool (or none.) Always starts a new activation.
    pub fn select(&mut self, tool: Option<ToolKind>) {
        self.clear();
        self.active = tool;
    }

    pub fn brush(&self) -> BrushType {
        self.brush.brush()
    }

    pub fn set_brush(&mut self, brush: BrushType) {
        self.brush.set_brush(brush);
    }

    pub fn set_pattern_source(&mut self, patterns: Box<dyn PatternSource>) {
        self.brush.set_pattern_source(patterns);
    }

    /// Handle a right click at the given pointer position.
    ///
    /// The first right click finishes the current activation; the
    /// tool may write a last bit of its gesture. If nothing has been
    /// clicked since then, the tool is put away.
    pub fn right_click(&mut self, p: Point, writer: &mut CodeWriter) {
        let p = self.resolution.clamp(p);
        if self.clicks() > 0 {
            if let Some(encoder) = self.encoder() {
                encoder.finish(p, writer);
                encoder.reset();
            }
        } else if let Some(tool) = self.active.take() {
            debug!("Deselected {} tool", tool);
            self.clear();
        }
    }

    fn encoder(&mut self) -> Option<&mut dyn GestureEncoder> {
        let encoder: &mut dyn GestureEncoder = match self.active? {
            ToolKind::Line => &mut self.line,
            ToolKind::Pen => &mut self.pen,
            ToolKind::StepLine => &mut self.stepline,
            ToolKind::Fill => &mut self.fill,
            ToolKind::Brush => &mut self.brush,
        };
        Some(encoder)
    }
}

impl GestureEncoder for ToolBox {
    /// Encode a click with the active tool.
    /// The point is clamped to the canvas first. Without a tool nothing happens.
    fn click(&mut self, p: Point, writer: &mut CodeWriter) {
        let p = self.resolution.clamp(p);
        if let Some(encoder) = self.encoder() {
            encoder.click(p, writer);
        }
    }

    fn clicks(&self) -> u32 {
        match self.active {
            Some(ToolKind::Line) => self.line.clicks(),
            Some(ToolKind::Pen) => self.pen.clicks(),
            Some(ToolKind::StepLine) => self.stepline.clicks(),
            Some(ToolKind::Fill) => self.fill.clicks(),
            Some(ToolKind::Brush) => self.brush.clicks(),
            None => 0,
        }
    }

    fn finish(&mut self, p: Point, writer: &mut CodeWriter) {
        let p = self.resolution.clamp(p);
        if let Some(encoder) = self.encoder() {
            encoder.finish(p, writer);
        }
    }

    fn reset(&mut self) {
        if let Some(encoder) = self.encoder() {
            encoder.reset();
        }
    }

    /// Every tool forgets its endpoint, not just the active one
    fn clear(&mut self) {
        self.line.clear();
        self.pen.clear();
        self.stepline.clear();
        self.fill.clear();
        self.brush.clear();
    }
}

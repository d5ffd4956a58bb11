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

use super::replay::{DrawState, Planes, Replay};
use super::sequence::{CodeSequence, SequenceEvent};
use crate::paint::{BrushType, Point, Resolution};
use crate::protocol::{listing, Action, CodeWriter, DecodeError};
use crate::tools::{GestureEncoder, PatternSource, ToolBox, ToolKind};

use tracing::info;

/// An open picture.
///
/// Holds the code sequence, the planes rendered at the cursor and the
/// drawing tools. The planes are re-rendered from scratch after every
/// change.
pub struct Picture {
    sequence: CodeSequence,
    planes: Planes,
    state: DrawState,
    tools: ToolBox,
}

impl Picture {
    /// Create an empty picture
    pub fn new(resolution: Resolution) -> Picture {
        Self::from_sequence(CodeSequence::new(), resolution)
    }

    /// Load a picture from a raw stream. The cursor is placed at Start.
    pub fn load(bytes: &[u8], resolution: Resolution) -> Result<Picture, DecodeError> {
        let sequence = CodeSequence::from_bytes(bytes)?;
        info!("Loaded picture with {} codes", sequence.len());
        Ok(Self::from_sequence(sequence, resolution))
    }

    fn from_sequence(sequence: CodeSequence, resolution: Resolution) -> Picture {
        let mut picture = Picture {
            sequence,
            planes: Planes::new(resolution),
            state: DrawState::default(),
            tools: ToolBox::new(resolution),
        };
        picture.render();
        picture
    }

    pub fn resolution(&self) -> Resolution {
        self.planes.resolution()
    }

    pub fn sequence(&self) -> &CodeSequence {
        &self.sequence
    }

    /// The planes as they look at the current cursor position
    pub fn planes(&self) -> &Planes {
        &self.planes
    }

    /// Drawing state at the current cursor position
    pub fn draw_state(&self) -> &DrawState {
        &self.state
    }

    pub fn position(&self) -> usize {
        self.sequence.position()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.sequence.to_bytes()
    }

    /// Description of every row, for list views
    pub fn listing(&self) -> Vec<String> {
        listing(self.sequence.codes())
    }

    fn render(&mut self) {
        let mut replay = Replay::new(self.resolution());
        replay.run(self.sequence.executed());
        self.state = *replay.state();
        self.planes = replay.into_planes();
    }

    fn after_move(&mut self, events: Vec<SequenceEvent>) -> Vec<SequenceEvent> {
        if !events.is_empty() {
            self.tools.clear();
            self.render();
        }
        events
    }

    fn append(&mut self, bytes: &[u8]) -> Result<Vec<SequenceEvent>, DecodeError> {
        let events = self.sequence.append_all(bytes)?;
        self.render();
        Ok(events)
    }

    // Tools

    pub fn active_tool(&self) -> Option<ToolKind> {
        self.tools.active()
    }

    pub fn select_tool(&mut self, tool: Option<ToolKind>) {
        self.tools.select(tool);
    }

    pub fn brush(&self) -> BrushType {
        self.tools.brush()
    }

    pub fn set_brush(&mut self, brush: BrushType) {
        self.tools.set_brush(brush);
    }

    pub fn set_pattern_source(&mut self, patterns: Box<dyn PatternSource>) {
        self.tools.set_pattern_source(patterns);
    }

    fn append_gesture(&mut self, writer: CodeWriter) -> Result<Vec<SequenceEvent>, DecodeError> {
        if writer.is_empty() {
            return Ok(vec![]);
        }

        let bytes: Vec<u8> = writer.into();
        let result = self.append(&bytes);
        if result.is_err() {
            self.tools.clear();
        }
        result
    }

    /// Click on the canvas with the active tool
    pub fn click(&mut self, p: Point) -> Result<Vec<SequenceEvent>, DecodeError> {
        let mut writer = CodeWriter::new();
        self.tools.click(p, &mut writer);
        self.append_gesture(writer)
    }

    /// Right click on the canvas: finishes the active tool's gesture,
    /// or puts the tool away if it has not been used since.
    pub fn right_click(&mut self, p: Point) -> Result<Vec<SequenceEvent>, DecodeError> {
        let mut writer = CodeWriter::new();
        self.tools.right_click(p, &mut writer);
        self.append_gesture(writer)
    }

    /// Set the visual drawing color. None (or the blank color) turns visual drawing off.
    pub fn set_visual_color(&mut self, color: Option<u8>) -> Result<Vec<SequenceEvent>, DecodeError> {
        let blank = self.resolution().visual_blank();
        self.set_color(color, blank, Action::SetVisualColor, Action::VisualOff)
    }

    /// Set the priority drawing color. None (or the blank color) turns priority drawing off.
    pub fn set_priority_color(
        &mut self,
        color: Option<u8>,
    ) -> Result<Vec<SequenceEvent>, DecodeError> {
        let blank = self.resolution().priority_blank();
        self.set_color(color, blank, Action::SetPriorityColor, Action::PriorityOff)
    }

    fn set_color(
        &mut self,
        color: Option<u8>,
        blank: u8,
        set: Action,
        off: Action,
    ) -> Result<Vec<SequenceEvent>, DecodeError> {
        let mut writer = CodeWriter::new();
        match color.map(|c| c & 0x0f) {
            Some(c) if c != blank => {
                writer.write_action(set);
                writer.write_byte(c);
            }
            _ => writer.write_action(off),
        }

        // whatever the tool was doing, its action is over now
        self.tools.reset();
        let bytes: Vec<u8> = writer.into();
        self.append(&bytes)
    }

    // Navigation

    pub fn set_position(&mut self, row: usize) -> Vec<SequenceEvent> {
        let events = self.sequence.set_position(row);
        self.after_move(events)
    }

    pub fn move_forward_one_action(&mut self) -> Vec<SequenceEvent> {
        let events = self.sequence.move_forward_one_action();
        self.after_move(events)
    }

    pub fn move_back_one_action(&mut self) -> Vec<SequenceEvent> {
        let events = self.sequence.move_back_one_action();
        self.after_move(events)
    }

    pub fn home(&mut self) -> Vec<SequenceEvent> {
        let events = self.sequence.home();
        self.after_move(events)
    }

    pub fn end(&mut self) -> Vec<SequenceEvent> {
        let events = self.sequence.end();
        self.after_move(events)
    }

    pub fn delete_current_action(&mut self) -> Vec<SequenceEvent> {
        let events = self.sequence.delete_current_action();
        self.after_move(events)
    }
}

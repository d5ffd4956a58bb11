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

use super::document::Picture;
use super::sequence::SequenceEvent;
use crate::paint::{BrushType, Point};
use crate::protocol::DecodeError;
use crate::tools::ToolKind;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Listener for changes to a picture's code list.
/// Rows are list rows: 0 is Start and the codes start from 1.
pub trait PictureObserver {
    fn added(&mut self, from: usize, to: usize);
    fn removed(&mut self, from: usize, to: usize);

    /// Codes in these rows now have a different meaning
    fn changed(&mut self, _from: usize, _to: usize) {}

    /// The cursor moved
    fn moved(&mut self, _position: usize) {}
}

pub struct ObservablePicture {
    picture: Picture,
    observers: Vec<Weak<RefCell<dyn PictureObserver>>>,
}

/// A wrapper around Picture that lets observers follow changes to the code list.
impl ObservablePicture {
    pub fn new(picture: Picture) -> ObservablePicture {
        ObservablePicture {
            picture,
            observers: Vec::new(),
        }
    }

    /// Unwrap the inner Picture
    pub fn into_inner(self) -> Picture {
        self.picture
    }

    /// Get a read only reference to the picture under observation
    pub fn picture(&self) -> &Picture {
        &self.picture
    }

    /// Add a new observer.
    /// This struct will hold a weak reference to it.
    pub fn add_observer(&mut self, o: Rc<RefCell<dyn PictureObserver>>) {
        self.observers.push(Rc::downgrade(&o));
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Replace the picture with another one (e.g. a newly loaded file)
    pub fn replace(&mut self, picture: Picture) {
        let old = std::mem::replace(&mut self.picture, picture);

        let mut events = Vec::new();
        if !old.sequence().is_empty() {
            events.push(SequenceEvent::Removed {
                from: 1,
                to: old.sequence().len(),
            });
        }
        if !self.picture.sequence().is_empty() {
            events.push(SequenceEvent::Added {
                from: 1,
                to: self.picture.sequence().len(),
            });
        }
        events.push(SequenceEvent::Moved(self.picture.position()));
        self.notify(&events);
    }

    pub fn select_tool(&mut self, tool: Option<ToolKind>) {
        self.picture.select_tool(tool);
    }

    pub fn set_brush(&mut self, brush: BrushType) {
        self.picture.set_brush(brush);
    }

    pub fn right_click(&mut self, p: Point) -> Result<(), DecodeError> {
        let events = self.picture.right_click(p)?;
        self.notify(&events);
        Ok(())
    }

    pub fn click(&mut self, p: Point) -> Result<(), DecodeError> {
        let events = self.picture.click(p)?;
        self.notify(&events);
        Ok(())
    }

    pub fn set_visual_color(&mut self, color: Option<u8>) -> Result<(), DecodeError> {
        let events = self.picture.set_visual_color(color)?;
        self.notify(&events);
        Ok(())
    }

    pub fn set_priority_color(&mut self, color: Option<u8>) -> Result<(), DecodeError> {
        let events = self.picture.set_priority_color(color)?;
        self.notify(&events);
        Ok(())
    }

    pub fn set_position(&mut self, row: usize) {
        let events = self.picture.set_position(row);
        self.notify(&events);
    }

    pub fn move_forward_one_action(&mut self) {
        let events = self.picture.move_forward_one_action();
        self.notify(&events);
    }

    pub fn move_back_one_action(&mut self) {
        let events = self.picture.move_back_one_action();
        self.notify(&events);
    }

    pub fn home(&mut self) {
        let events = self.picture.home();
        self.notify(&events);
    }

    pub fn end(&mut self) {
        let events = self.picture.end();
        self.notify(&events);
    }

    pub fn delete_current_action(&mut self) {
        let events = self.picture.delete_current_action();
        self.notify(&events);
    }

    fn notify(&mut self, events: &[SequenceEvent]) {
        if events.is_empty() {
            return;
        }

        let mut cleanup = false;

        for o in self.observers.iter() {
            if let Some(o_rc) = o.upgrade() {
                let mut observer = o_rc.borrow_mut();
                for e in events {
                    match *e {
                        SequenceEvent::Added { from, to } => observer.added(from, to),
                        SequenceEvent::Removed { from, to } => observer.removed(from, to),
                        SequenceEvent::Changed { from, to } => observer.changed(from, to),
                        SequenceEvent::Moved(pos) => observer.moved(pos),
                    }
                }
            } else {
                cleanup = true;
            }
        }

        if cleanup {
            self.observers.retain(|o| o.upgrade().is_some());
        }
    }
}

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

use crate::protocol::decoder::scan_state;
use crate::protocol::{decode, serialize, Code, DecodeError};

use tracing::{debug, warn};

/// A change to the sequence, in list rows.
///
/// Row 0 is the Start row, rows 1..=n hold the codes and row n+1 is
/// the End row. Ranges are inclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SequenceEvent {
    Added { from: usize, to: usize },
    Removed { from: usize, to: usize },
    /// Codes in these rows were reclassified
    Changed { from: usize, to: usize },
    /// The cursor moved to this row
    Moved(usize),
}

/// The code sequence of a picture and the history cursor.
///
/// The cursor row is the next code to execute: everything strictly
/// before it is considered done. At the End row the whole picture is
/// drawn, at the Start row nothing is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeSequence {
    codes: Vec<Code>,
    position: usize,
}

impl CodeSequence {
    pub fn new() -> CodeSequence {
        Self::default()
    }

    /// Create a sequence from already classified codes. The cursor starts at Start.
    pub fn from_codes(codes: Vec<Code>) -> CodeSequence {
        CodeSequence { codes, position: 0 }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<CodeSequence, DecodeError> {
        Ok(Self::from_codes(decode(bytes)?))
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        serialize(&self.codes)
    }

    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    /// The codes before the cursor
    pub fn executed(&self) -> &[Code] {
        &self.codes[..self.position.saturating_sub(1)]
    }

    /// Number of codes (excluding the Start and End rows)
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Number of list rows, including Start and End
    pub fn rows(&self) -> usize {
        self.codes.len() + 2
    }

    pub fn end_row(&self) -> usize {
        self.codes.len() + 1
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.position == self.end_row()
    }

    /// Get the code in a list row. Start and End rows have none.
    pub fn code_at_row(&self, row: usize) -> Option<&Code> {
        if row == 0 {
            None
        } else {
            self.codes.get(row - 1)
        }
    }

    fn is_action_row(&self, row: usize) -> bool {
        self.code_at_row(row).map_or(false, |c| c.is_action())
    }

    /// Index in `codes` where the next code would be inserted
    fn insert_index(&self) -> usize {
        self.position.max(1) - 1
    }

    /// Get the first and last row of the action group the given row belongs to
    pub fn group_at(&self, row: usize) -> Option<(usize, usize)> {
        if row == 0 || row > self.codes.len() {
            return None;
        }

        let mut start = row;
        while start > 1 && !self.is_action_row(start) {
            start -= 1;
        }

        let mut end = row;
        while end < self.codes.len() && !self.is_action_row(end + 1) {
            end += 1;
        }

        Some((start, end))
    }

    fn move_to(&mut self, row: usize) -> Vec<SequenceEvent> {
        if row == self.position {
            vec![]
        } else {
            self.position = row;
            vec![SequenceEvent::Moved(row)]
        }
    }

    fn truncate_codes(&mut self, keep: usize) -> Option<SequenceEvent> {
        if keep >= self.codes.len() {
            return None;
        }
        let removed = SequenceEvent::Removed {
            from: keep + 1,
            to: self.codes.len(),
        };
        self.codes.truncate(keep);
        Some(removed)
    }

    /// Drop every code from the cursor onwards.
    /// The cursor ends up on the End row.
    pub fn truncate_after_cursor(&mut self) -> Vec<SequenceEvent> {
        let mut events: Vec<SequenceEvent> =
            self.truncate_codes(self.insert_index()).into_iter().collect();
        let end = self.end_row();
        events.extend(self.move_to(end));
        events
    }

    /// Append a byte at the cursor. See `append_all`.
    pub fn append(&mut self, byte: u8) -> Result<Vec<SequenceEvent>, DecodeError> {
        self.append_all(&[byte])
    }

    /// Append bytes at the cursor.
    ///
    /// Codes from the cursor onwards are discarded first. The bytes
    /// are classified as a continuation of the codes before the cursor;
    /// if any of them is not valid there, nothing is changed.
    /// Afterwards the cursor is on the End row.
    pub fn append_all(&mut self, bytes: &[u8]) -> Result<Vec<SequenceEvent>, DecodeError> {
        let insert = self.insert_index();
        let mut state = scan_state(self.codes[..insert].iter().map(|c| c.value()));

        let mut new_codes = Vec::with_capacity(bytes.len());
        for (i, &b) in bytes.iter().enumerate() {
            let (kind, next) = state
                .classify(b)
                .map_err(|e| DecodeError::from_classify(e, insert + i, b))?;
            new_codes.push(Code::new(b, kind));
            state = next;
        }

        let mut events: Vec<SequenceEvent> = self.truncate_codes(insert).into_iter().collect();

        if !new_codes.is_empty() {
            events.push(SequenceEvent::Added {
                from: insert + 1,
                to: insert + new_codes.len(),
            });
            self.codes.extend(new_codes);
        }

        let end = self.end_row();
        events.extend(self.move_to(end));
        Ok(events)
    }

    /// Remove the action group the cursor is on.
    ///
    /// The codes after it are reclassified, since they may now be read in
    /// a different context. The cursor stays on the row where the group
    /// started. Nothing happens at the Start or End rows.
    pub fn delete_current_action(&mut self) -> Vec<SequenceEvent> {
        let (start, end) = match self.group_at(self.position) {
            Some(g) => g,
            None => return vec![],
        };

        // Reclassify the rest before touching anything
        let mut state = scan_state(self.codes[..start - 1].iter().map(|c| c.value()));
        let mut following = Vec::with_capacity(self.codes.len() - end);
        let mut changed: Option<(usize, usize)> = None;

        for (i, code) in self.codes[end..].iter().enumerate() {
            let (kind, next) = match state.resume(code.value()) {
                Ok(r) => r,
                Err(e) => {
                    warn!(
                        "Cannot delete rows {}-{}: row {} would become invalid ({:?})",
                        start,
                        end,
                        end + i + 1,
                        e
                    );
                    return vec![];
                }
            };
            if kind != code.kind() {
                let row = start + i;
                changed = Some(changed.map_or((row, row), |(a, _)| (a, row)));
            }
            following.push(Code::new(code.value(), kind));
            state = next;
        }

        debug!("Deleting rows {}-{}", start, end);

        self.codes.truncate(start - 1);
        self.codes.extend(following);

        let mut events = vec![SequenceEvent::Removed { from: start, to: end }];
        if let Some((from, to)) = changed {
            events.push(SequenceEvent::Changed { from, to });
        }
        self.position = start;
        events.push(SequenceEvent::Moved(start));
        events
    }

    /// Move the cursor. The row is clamped to the sequence and
    /// a data row snaps back to the action it belongs to.
    pub fn set_position(&mut self, row: usize) -> Vec<SequenceEvent> {
        let row = row.min(self.end_row());
        let row = match self.group_at(row) {
            Some((start, _)) => start,
            None => row,
        };
        self.move_to(row)
    }

    pub fn move_forward_one_action(&mut self) -> Vec<SequenceEvent> {
        let end = self.end_row();
        let next = (self.position + 1..end)
            .find(|&r| self.is_action_row(r))
            .unwrap_or(end);
        self.move_to(next.min(end))
    }

    pub fn move_back_one_action(&mut self) -> Vec<SequenceEvent> {
        let prev = (1..self.position.min(self.end_row()))
            .rev()
            .find(|&r| self.is_action_row(r))
            .unwrap_or(0);
        self.move_to(prev)
    }

    pub fn home(&mut self) -> Vec<SequenceEvent> {
        self.move_to(0)
    }

    pub fn end(&mut self) -> Vec<SequenceEvent> {
        let end = self.end_row();
        self.move_to(end)
    }
}

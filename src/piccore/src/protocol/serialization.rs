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

use super::decoder::{ClassifyError, DecodeState};
use super::opcode::{Action, Code};
use crate::paint::Point;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A reserved byte in the action range
    UnknownOpcode { offset: usize, value: u8 },
    /// A data byte no action consumes
    UnexpectedData { offset: usize, value: u8 },
    /// The stream moved on (or ended) while an action still needed data
    Truncated { offset: usize, action: Action },
    /// No End opcode
    MissingEnd { length: usize },
    /// Bytes after the End opcode
    TrailingData { offset: usize },
}

impl DecodeError {
    pub fn from_classify(err: ClassifyError, offset: usize, value: u8) -> DecodeError {
        match err {
            ClassifyError::UnknownOpcode => DecodeError::UnknownOpcode { offset, value },
            ClassifyError::UnexpectedData => DecodeError::UnexpectedData { offset, value },
            ClassifyError::Truncated(action) => DecodeError::Truncated { offset, action },
        }
    }

    /// Position in the stream where the problem was noticed
    pub fn offset(&self) -> usize {
        match self {
            DecodeError::UnknownOpcode { offset, .. }
            | DecodeError::UnexpectedData { offset, .. }
            | DecodeError::Truncated { offset, .. }
            | DecodeError::TrailingData { offset } => *offset,
            DecodeError::MissingEnd { length } => *length,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnknownOpcode { offset, value } => {
                write!(f, "unknown opcode 0x{:02X} at offset {}", value, offset)
            }
            DecodeError::UnexpectedData { offset, value } => {
                write!(f, "unexpected data byte 0x{:02X} at offset {}", value, offset)
            }
            DecodeError::Truncated { offset, action } => {
                write!(f, "{} is missing data at offset {}", action.name(), offset)
            }
            DecodeError::MissingEnd { length } => {
                write!(f, "no end opcode in {} bytes", length)
            }
            DecodeError::TrailingData { offset } => {
                write!(f, "trailing data after end opcode at offset {}", offset)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Reads classified codes from a raw picture stream
pub struct CodeReader<'a> {
    buf: &'a [u8],
    offset: usize,
    state: DecodeState,
}

impl<'a> CodeReader<'a> {
    pub fn new(buf: &'a [u8]) -> CodeReader<'a> {
        CodeReader {
            buf,
            offset: 0,
            state: DecodeState::new(),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }

    /// Read the next code.
    ///
    /// Returns None once the End opcode has been read. End itself is
    /// not returned, since a code sequence never stores it.
    pub fn read_code(&mut self) -> Result<Option<Code>, DecodeError> {
        let value = match self.buf.get(self.offset) {
            Some(&v) => v,
            None => {
                self.state
                    .finish()
                    .map_err(|e| DecodeError::from_classify(e, self.offset, 0))?;
                return Err(DecodeError::MissingEnd {
                    length: self.buf.len(),
                });
            }
        };

        let (kind, next) = self
            .state
            .classify(value)
            .map_err(|e| DecodeError::from_classify(e, self.offset, value))?;

        self.state = next;
        self.offset += 1;

        if kind.action() == Some(Action::End) {
            Ok(None)
        } else {
            Ok(Some(Code::new(value, kind)))
        }
    }
}

/// Decode a complete picture stream
pub fn decode(bytes: &[u8]) -> Result<Vec<Code>, DecodeError> {
    let mut reader = CodeReader::new(bytes);
    let mut codes = Vec::with_capacity(bytes.len());

    while let Some(code) = reader.read_code()? {
        codes.push(code);
    }

    if reader.remaining() > 0 {
        return Err(DecodeError::TrailingData {
            offset: reader.offset(),
        });
    }

    Ok(codes)
}

/// Serialize a code sequence, appending the End opcode
pub fn serialize(codes: &[Code]) -> Vec<u8> {
    let mut writer = CodeWriter::new();
    for c in codes {
        writer.write_byte(c.value());
    }
    writer.finish()
}

/// Builds raw picture bytes
#[derive(Debug, Default)]
pub struct CodeWriter {
    buf: Vec<u8>,
}

impl CodeWriter {
    pub fn new() -> CodeWriter {
        Self::default()
    }

    pub fn write_action(&mut self, action: Action) {
        self.buf.push(action.into());
    }

    pub fn write_byte(&mut self, value: u8) {
        self.buf.push(value);
    }

    /// Write a point as an X byte followed by a Y byte.
    /// The point must have been clamped to the canvas already.
    pub fn write_point(&mut self, p: Point) {
        debug_assert!((0..0xF0).contains(&p.x) && (0..0xF0).contains(&p.y));
        self.buf.push(p.x as u8);
        self.buf.push(p.y as u8);
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Terminate the stream with an End opcode
    pub fn finish(mut self) -> Vec<u8> {
        self.write_action(Action::End);
        self.buf
    }
}

impl From<CodeWriter> for Vec<u8> {
    fn from(writer: CodeWriter) -> Vec<u8> {
        writer.buf
    }
}

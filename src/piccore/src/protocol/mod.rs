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


pub mod decoder;
pub mod describe;
pub mod opcode;
pub mod serialization;

pub use decoder::{DecodeState, Expect};
pub use describe::listing;
pub use opcode::{Action, Axis, Code, Kind};
pub use serialization::{decode, serialize, CodeReader, CodeWriter, DecodeError};

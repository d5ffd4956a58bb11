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


pub mod brushmask;
pub mod floodfill;
pub mod line;
pub mod palette;

// Re-export types most commonly used from the outside
mod plane;
mod rect;

pub use brushmask::{BrushShape, BrushTexture, BrushType, SplatterCursor};
pub use plane::RasterPlane;
pub use rect::{Point, Rectangle, Resolution, MAX_COORDINATE};

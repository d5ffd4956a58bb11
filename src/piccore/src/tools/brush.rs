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

use super::GestureEncoder;
use crate::paint::brushmask::PATTERN_COUNT;
use crate::paint::{BrushType, Point};
use crate::protocol::{Action, CodeWriter};

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};

/// Picks the spray pattern number for each brush point
pub trait PatternSource {
    /// Get the next pattern number (0..PATTERN_COUNT)
    fn next_pattern(&mut self) -> u8;
}

/// A pattern source that is different on every run
pub struct RandomPatterns {
    state: u64,
}

impl RandomPatterns {
    pub fn new() -> RandomPatterns {
        let mut hasher = RandomState::new().build_hasher();
        hasher.write_u64(0x5eed);
        RandomPatterns {
            state: hasher.finish() | 1,
        }
    }
}

impl Default for RandomPatterns {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternSource for RandomPatterns {
    fn next_pattern(&mut self) -> u8 {
        // xorshift64
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        (x % PATTERN_COUNT as u64) as u8
    }
}

/// Stamps the brush at every clicked point
pub struct BrushTool {
    clicks: u32,
    brush: BrushType,
    patterns: Box<dyn PatternSource>,
}

impl BrushTool {
    pub fn new() -> BrushTool {
        Self::with_patterns(Box::new(RandomPatterns::new()))
    }

    pub fn with_patterns(patterns: Box<dyn PatternSource>) -> BrushTool {
        BrushTool {
            clicks: 0,
            brush: BrushType::default(),
            patterns,
        }
    }

    pub fn brush(&self) -> BrushType {
        self.brush
    }

    /// Change the brush. The next click starts a new activation
    /// so the brush type gets written out.
    pub fn set_brush(&mut self, brush: BrushType) {
        self.brush = brush;
        self.clicks = 0;
    }

    pub fn set_pattern_source(&mut self, patterns: Box<dyn PatternSource>) {
        self.patterns = patterns;
    }
}

impl Default for BrushTool {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureEncoder for BrushTool {
    fn click(&mut self, p: Point, writer: &mut CodeWriter) {
        if self.clicks == 0 {
            writer.write_action(Action::SetBrushType);
            writer.write_byte(self.brush.to_byte());
            writer.write_action(Action::PlotBrush);
        }
        if self.brush.is_spray() {
            let n = self.patterns.next_pattern() % PATTERN_COUNT;
            writer.write_byte(n << 1);
        }
        writer.write_point(p);
        self.clicks += 1;
    }

    fn clicks(&self) -> u32 {
        self.clicks
    }

    fn reset(&mut self) {
        self.clicks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{BrushShape, BrushTexture};

    struct Counter(u8);

    impl PatternSource for Counter {
        fn next_pattern(&mut self) -> u8 {
            self.0 += 1;
            self.0
        }
    }

    #[test]
    fn test_solid_brush() {
        let mut tool = BrushTool::new();
        tool.set_brush(BrushType::new(BrushShape::Square, BrushTexture::Solid, 3));
        let mut writer = CodeWriter::new();
        tool.click(Point::new(10, 20), &mut writer);
        tool.click(Point::new(11, 21), &mut writer);
        let bytes: Vec<u8> = writer.into();
        assert_eq!(bytes, vec![0xF9, 0x13, 0xFA, 10, 20, 11, 21]);
    }

    #[test]
    fn test_spray_brush() {
        let mut tool = BrushTool::with_patterns(Box::new(Counter(0)));
        tool.set_brush(BrushType::new(BrushShape::Circle, BrushTexture::Spray, 1));
        let mut writer = CodeWriter::new();
        tool.click(Point::new(10, 20), &mut writer);
        tool.click(Point::new(11, 21), &mut writer);
        let bytes: Vec<u8> = writer.into();
        assert_eq!(bytes, vec![0xF9, 0x21, 0xFA, 2, 10, 20, 4, 11, 21]);
    }

    #[test]
    fn test_random_patterns_in_range() {
        let mut patterns = RandomPatterns::new();
        for _ in 0..1000 {
            assert!(patterns.next_pattern() < PATTERN_COUNT);
        }
    }
}

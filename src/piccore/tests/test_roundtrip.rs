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


use piccore::canvas::Picture;
use piccore::paint::{BrushShape, BrushTexture, BrushType, Point, Resolution};
use piccore::protocol::{decode, serialize, DecodeError};
use piccore::tools::ToolKind;

fn assert_roundtrip(bytes: &[u8]) {
    let codes = decode(bytes).unwrap();
    assert_eq!(serialize(&codes), bytes);
}

#[test]
fn test_stream_roundtrip() {
    assert_roundtrip(&[0xFF]);
    assert_roundtrip(&[0xF0, 0x0E, 0xF1, 0xF2, 0x03, 0xF3, 0xFF]);
    assert_roundtrip(&[0xF6, 0, 0, 0xEF, 0xA7, 3, 4, 0xFF]);
    assert_roundtrip(&[0xF7, 50, 50, 0x70, 0x07, 0xEF, 0x88, 0xFF]);
    assert_roundtrip(&[0xF4, 1, 2, 3, 4, 5, 6, 7, 0xF5, 1, 2, 3, 0xFF]);
    assert_roundtrip(&[0xF8, 10, 10, 20, 20, 30, 30, 0xFF]);
    assert_roundtrip(&[
        0xF9, 0x37, 0xFA, 0xEE, 0, 0, 0x00, 1, 1, 0xF9, 0x07, 0xFA, 5, 5, 0xFF,
    ]);
    // a line with no vertices yet is still a valid stream
    assert_roundtrip(&[0xF6, 0xF8, 0xFA, 0xFF]);
}

#[test]
fn test_data_bytes_never_look_like_actions() {
    // Any byte from 0xF0 up starts a new action even where data is expected
    let codes = decode(&[0xF6, 10, 10, 0xF3, 0xFF]).unwrap();
    assert_eq!(codes.len(), 4);
    assert!(codes[3].is_action());

    assert_eq!(
        decode(&[0xF6, 10, 0xF3, 0xFF]),
        Err(DecodeError::Truncated {
            offset: 2,
            action: piccore::protocol::Action::AbsoluteLine
        })
    );
}

#[test]
fn test_edited_picture_roundtrip() {
    let mut pic = Picture::new(Resolution::Legacy);
    pic.set_visual_color(Some(1)).unwrap();
    pic.set_priority_color(Some(10)).unwrap();

    pic.select_tool(Some(ToolKind::Pen));
    for &(x, y) in &[(20, 20), (25, 24), (90, 90), (10, 100)] {
        pic.click(Point::new(x, y)).unwrap();
    }

    pic.select_tool(Some(ToolKind::StepLine));
    for &(x, y) in &[(100, 10), (130, 15), (135, 60), (150, 62)] {
        pic.click(Point::new(x, y)).unwrap();
    }

    pic.select_tool(Some(ToolKind::Brush));
    pic.set_brush(BrushType::new(BrushShape::Square, BrushTexture::Spray, 4));
    for &(x, y) in &[(60, 120), (70, 130), (500, -20)] {
        pic.click(Point::new(x, y)).unwrap();
    }

    pic.select_tool(Some(ToolKind::Fill));
    pic.click(Point::new(5, 5)).unwrap();

    let bytes = pic.to_bytes();
    let loaded = Picture::load(&bytes, Resolution::Legacy).unwrap();
    assert_eq!(loaded.sequence().codes(), pic.sequence().codes());
    assert_eq!(loaded.to_bytes(), bytes);
}

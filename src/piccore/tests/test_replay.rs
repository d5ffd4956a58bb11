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


use piccore::canvas::{render, Picture};
use piccore::paint::{Point, Resolution};
use piccore::protocol::decode;
use piccore::tools::ToolKind;

#[test]
fn test_vertical_line_scenario() {
    let mut pic = Picture::new(Resolution::Legacy);
    pic.set_visual_color(Some(4)).unwrap();
    pic.select_tool(Some(ToolKind::Line));
    pic.click(Point::new(10, 10)).unwrap();
    pic.click(Point::new(10, 20)).unwrap();

    assert_eq!(pic.position(), pic.sequence().rows() - 1);

    let visual = &pic.planes().visual;
    for y in 10..=20 {
        assert_eq!(visual.pixel_at(10, y), Some(4));
    }
    assert_eq!(visual.count(4), 11);
    assert_eq!(visual.count(visual.blank()), 160 * 168 - 11);

    // blank pixels show up as transparent
    let rgba = visual.to_rgba(true);
    assert_eq!(rgba[3], 0);
    let i = (10 * 160 + 10) * 4;
    assert_eq!(&rgba[i..i + 4], &[0xaa, 0, 0, 0xff]);

    // nothing was drawn on the priority plane
    assert_eq!(pic.planes().priority.count(4), 160 * 168);
}

#[test]
fn test_fill_polygon_scenario() {
    let mut pic = Picture::new(Resolution::Legacy);
    pic.set_visual_color(Some(2)).unwrap();
    pic.select_tool(Some(ToolKind::Line));
    for &(x, y) in &[(20, 20), (60, 20), (60, 60), (20, 60), (20, 20)] {
        pic.click(Point::new(x, y)).unwrap();
    }
    pic.right_click(Point::new(20, 20)).unwrap();

    pic.set_visual_color(Some(9)).unwrap();
    pic.select_tool(Some(ToolKind::Fill));
    pic.click(Point::new(40, 40)).unwrap();

    let visual = &pic.planes().visual;
    assert_eq!(visual.count(9), 39 * 39);
    assert_eq!(visual.pixel_at(40, 40), Some(9));
    assert_eq!(visual.pixel_at(20, 40), Some(2));
    assert_eq!(visual.pixel_at(10, 10), Some(15));
    assert_eq!(visual.pixel_at(70, 70), Some(15));
}

#[test]
fn test_move_back_scenario() {
    let bytes = [0xF0, 0x01, 0xF6, 0, 0, 5, 0, 0xF6, 0, 10, 5, 10, 0xFF];
    let mut pic = Picture::load(&bytes, Resolution::Legacy).unwrap();
    assert_eq!(pic.position(), 0);
    assert_eq!(pic.planes().visual.count(1), 0);

    pic.end();
    assert_eq!(pic.planes().visual.count(1), 12);

    pic.move_back_one_action();
    // right after the first line's data
    assert_eq!(pic.position(), 8);
    assert_eq!(pic.planes().visual.count(1), 6);
    assert_eq!(pic.planes().visual.pixel_at(0, 10), Some(15));
}

#[test]
fn test_replay_is_idempotent() {
    let bytes = [
        0xF0, 0x03, 0xF2, 0x05, 0xF6, 0, 0, 50, 80, 0xF7, 10, 10, 0x33, 0xBB, 0xF8, 100, 100,
        0xF9, 0x25, 0xFA, 10, 60, 60, 40, 70, 70, 0xFF,
    ];
    let codes = decode(&bytes).unwrap();
    for upto in 0..codes.len() + 2 {
        let a = render(&codes, upto, Resolution::Legacy);
        let b = render(&codes, upto, Resolution::Legacy);
        assert_eq!(a, b);
    }
}

#[test]
fn test_fill_containment() {
    // A rectangle on both planes, filled from inside with different colors
    let bytes = [
        0xF0, 0x00, 0xF2, 0x01, 0xF6, 30, 30, 50, 30, 50, 40, 30, 40, 30, 30, 0xF0, 0x0E, 0xF2,
        0x0C, 0xF8, 40, 35, 0xFF,
    ];
    let codes = decode(&bytes).unwrap();
    let planes = render(&codes, codes.len() + 1, Resolution::Legacy);

    let inside = 19 * 9;
    assert_eq!(planes.visual.count(14), inside);
    assert_eq!(planes.priority.count(12), inside);

    for y in 0..168 {
        for x in 0..160 {
            if x <= 30 || x >= 50 || y <= 30 || y >= 40 {
                assert_ne!(planes.visual.pixel_at(x, y), Some(14));
                assert_ne!(planes.priority.pixel_at(x, y), Some(12));
            }
        }
    }
}

#[test]
fn test_wide_canvas() {
    let bytes = [0xF0, 0x01, 0xF6, 0, 0, 0xEF, 189, 0xF9, 0x00, 0xFA, 100, 100, 0xFF];
    let codes = decode(&bytes).unwrap();
    let planes = render(&codes, codes.len() + 1, Resolution::Wide);
    assert_eq!(planes.visual.pixel_at(0, 0), Some(1));
    assert_eq!(planes.visual.pixel_at(0xEF, 189), Some(1));

    // a single brush pixel covers two columns on the wide canvas
    assert_eq!(planes.visual.pixel_at(100, 100), Some(1));
    assert_eq!(planes.visual.pixel_at(101, 100), Some(1));
    assert_eq!(planes.priority.count(0), 320 * 190);
}

#[test]
fn test_line_color_changes_midway() {
    // An unfinished color change does not disturb the line drawn before it
    let bytes = [0xF0, 0x01, 0xF6, 0, 0, 9, 0, 0xF0, 0x02, 0xFF];
    let codes = decode(&bytes).unwrap();
    let planes = render(&codes, codes.len(), Resolution::Legacy);
    assert_eq!(planes.visual.count(1), 10);
}

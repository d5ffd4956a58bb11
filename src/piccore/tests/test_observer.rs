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


use piccore::canvas::{ObservablePicture, Picture, PictureObserver};
use piccore::paint::{Point, Resolution};
use piccore::tools::ToolKind;

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, PartialEq, Eq)]
enum Change {
    Added(usize, usize),
    Removed(usize, usize),
    Changed(usize, usize),
    Moved(usize),
}

struct TestObserver {
    changes: Vec<Change>,
}

impl PictureObserver for TestObserver {
    fn added(&mut self, from: usize, to: usize) {
        self.changes.push(Change::Added(from, to));
    }

    fn removed(&mut self, from: usize, to: usize) {
        self.changes.push(Change::Removed(from, to));
    }

    fn changed(&mut self, from: usize, to: usize) {
        self.changes.push(Change::Changed(from, to));
    }

    fn moved(&mut self, position: usize) {
        self.changes.push(Change::Moved(position));
    }
}

/// An observer that only cares about the list contents
struct RowCounter {
    rows: usize,
}

impl PictureObserver for RowCounter {
    fn added(&mut self, from: usize, to: usize) {
        self.rows += to - from + 1;
    }

    fn removed(&mut self, from: usize, to: usize) {
        self.rows -= to - from + 1;
    }
}

#[test]
fn test_picture_observation() {
    let mut pic = ObservablePicture::new(Picture::new(Resolution::Legacy));

    let observer = Rc::new(RefCell::new(TestObserver { changes: vec![] }));
    let counter = Rc::new(RefCell::new(RowCounter { rows: 2 }));

    pic.add_observer(observer.clone());
    pic.add_observer(counter.clone());
    assert_eq!(pic.observer_count(), 2);

    pic.set_visual_color(Some(4)).unwrap();
    assert_eq!(
        observer.borrow().changes,
        vec![Change::Added(1, 2), Change::Moved(3)]
    );

    pic.select_tool(Some(ToolKind::Line));
    pic.click(Point::new(10, 10)).unwrap();
    pic.click(Point::new(10, 20)).unwrap();
    assert_eq!(counter.borrow().rows, pic.picture().sequence().rows());

    observer.borrow_mut().changes.clear();
    pic.move_back_one_action();
    pic.move_back_one_action();
    pic.move_back_one_action();
    assert_eq!(
        observer.borrow().changes,
        vec![Change::Moved(3), Change::Moved(1), Change::Moved(0)]
    );

    // nothing happens, nothing is reported
    observer.borrow_mut().changes.clear();
    pic.move_back_one_action();
    pic.delete_current_action();
    assert!(observer.borrow().changes.is_empty());

    pic.set_position(5);
    pic.delete_current_action();
    assert_eq!(
        observer.borrow().changes,
        vec![
            Change::Moved(3),
            Change::Removed(3, 7),
            Change::Moved(3)
        ]
    );
    assert_eq!(counter.borrow().rows, pic.picture().sequence().rows());
}

#[test]
fn test_reclassification_is_reported() {
    let bytes = [0xF9, 0x20, 0xFA, 8, 10, 20, 0xFF];
    let mut pic = ObservablePicture::new(Picture::load(&bytes, Resolution::Legacy).unwrap());
    let observer = Rc::new(RefCell::new(TestObserver { changes: vec![] }));
    pic.add_observer(observer.clone());

    pic.set_position(1);
    pic.delete_current_action();
    assert_eq!(
        observer.borrow().changes,
        vec![
            Change::Moved(1),
            Change::Removed(1, 2),
            Change::Changed(2, 4),
            Change::Moved(1)
        ]
    );
}

#[test]
fn test_replace_picture() {
    let mut pic = ObservablePicture::new(Picture::new(Resolution::Legacy));
    let counter = Rc::new(RefCell::new(RowCounter { rows: 2 }));
    pic.add_observer(counter.clone());

    pic.replace(Picture::load(&[0xF1, 0xF3, 0xFF], Resolution::Legacy).unwrap());
    assert_eq!(counter.borrow().rows, 4);

    pic.replace(Picture::load(&[0xF0, 0x01, 0xFF], Resolution::Legacy).unwrap());
    assert_eq!(counter.borrow().rows, 4);

    pic.replace(Picture::new(Resolution::Legacy));
    assert_eq!(counter.borrow().rows, 2);
}

#[test]
fn test_dropped_observer() {
    let mut pic = ObservablePicture::new(Picture::new(Resolution::Legacy));
    let observer = Rc::new(RefCell::new(TestObserver { changes: vec![] }));
    pic.add_observer(observer.clone());

    drop(observer);
    assert_eq!(pic.observer_count(), 1);

    // missing observer is not noticed until the next notification
    pic.set_priority_color(None).unwrap();
    assert_eq!(pic.observer_count(), 0);
}

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

use piccore::canvas::{render, Planes};
use piccore::paint::Resolution;
use piccore::protocol::{decode, listing, serialize, Code};

use anyhow::{bail, Context, Result};
use tracing::info;

use std::fs;

pub fn read_codes(input_file: &str) -> Result<Vec<Code>> {
    let bytes = fs::read(input_file).with_context(|| format!("Couldn't read {}", input_file))?;
    let codes = decode(&bytes).with_context(|| format!("{} is not a valid picture", input_file))?;
    info!("Read {} codes from {}", codes.len(), input_file);
    Ok(codes)
}

fn describe_bounds(name: &str, planes: &Planes, visual: bool) {
    let plane = if visual {
        &planes.visual
    } else {
        &planes.priority
    };
    match plane.drawn_bounds() {
        Some(r) => println!(
            "{} plane: drawn area {}x{} at ({}, {})",
            name, r.w, r.h, r.x, r.y
        ),
        None => println!("{} plane: empty", name),
    }
}

/// The code listing with row numbers and raw byte values
fn numbered_listing(codes: &[Code]) -> Vec<String> {
    listing(codes)
        .iter()
        .enumerate()
        .map(|(row, text)| {
            let value = match row {
                0 => None,
                r if r > codes.len() => Some(0xFF),
                r => Some(codes[r - 1].value()),
            };
            match value {
                Some(v) => format!("{:>5}  0x{:02X}  {}", row, v, text),
                None => format!("{:>5}        {}", row, text),
            }
        })
        .collect()
}

/// Print the code listing of a picture
pub fn dump_picture(input_file: &str, resolution: Resolution) -> Result<()> {
    let codes = read_codes(input_file)?;

    for line in numbered_listing(&codes) {
        println!("{}", line);
    }

    let actions = codes.iter().filter(|c| c.is_action()).count();
    println!();
    println!("{} actions, {} codes", actions, codes.len());

    let planes = render(&codes, codes.len() + 1, resolution);
    describe_bounds("Visual", &planes, true);
    describe_bounds("Priority", &planes, false);

    Ok(())
}

/// Check that a picture survives being decoded and serialized again
pub fn check_picture(input_file: &str) -> Result<()> {
    let bytes = fs::read(input_file).with_context(|| format!("Couldn't read {}", input_file))?;
    let codes = decode(&bytes).with_context(|| format!("{} is not a valid picture", input_file))?;
    let out = serialize(&codes);

    let actions = codes.iter().filter(|c| c.is_action()).count();
    println!(
        "{}: {} bytes, {} actions, {} data bytes",
        input_file,
        bytes.len(),
        actions,
        codes.len() - actions
    );

    if out != bytes {
        let offset = out
            .iter()
            .zip(bytes.iter())
            .position(|(a, b)| a != b)
            .unwrap_or_else(|| out.len().min(bytes.len()));
        bail!("Round trip differs at offset {}", offset);
    }

    println!("Round trip OK");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_listing() {
        let codes = decode(&[0xF0, 0x04, 0xF1, 0xFF]).unwrap();
        let lines = numbered_listing(&codes);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].trim(), "0        Start");
        assert!(lines[1].starts_with("    1  0xF0  "));
        assert!(lines[2].starts_with("    2  0x04  "));
        assert!(lines[2].ends_with("Color 4 (red)"));
        assert_eq!(lines[4], "    4  0xFF  End");
    }
}

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

use crate::dump::read_codes;
use piccore::canvas::{render, CodeSequence, Planes};
use piccore::paint::{RasterPlane, Resolution};

use anyhow::{Context, Result};
use tracing::info;

use std::path::Path;
use std::time::{Duration, Instant};

pub struct RenderOpts<'a> {
    /// Name of input picture file
    pub input_file: &'a str,

    /// Base name of the output images. `-visual.png` and `-priority.png`
    /// are appended (with a sequence number before them when saving every n actions)
    pub output_file: &'a str,

    /// Render the picture as it looks with the cursor at this row
    pub at: Option<usize>,

    /// Save images every n actions
    pub output_every: Option<u32>,

    pub resolution: Resolution,

    /// Double the width of legacy resolution pixels
    pub stretch: bool,
}

pub fn render_picture(opts: &RenderOpts) -> Result<()> {
    let start = Instant::now();
    let mut sequence = CodeSequence::from_codes(read_codes(opts.input_file)?);
    let mut total_save_time = Duration::new(0, 0);

    if let Some(every) = opts.output_every.filter(|&e| e > 0) {
        let action_rows: Vec<usize> = sequence
            .codes()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_action())
            .map(|(i, _)| i + 1)
            .collect();

        let mut image_num = 1;
        for &row in action_rows.iter().skip(every as usize).step_by(every as usize) {
            let planes = render(sequence.codes(), row, opts.resolution);
            total_save_time += save_planes(opts, &planes, image_num)?;
            image_num += 1;
        }

        let planes = render(sequence.codes(), sequence.end_row(), opts.resolution);
        total_save_time += save_planes(opts, &planes, image_num)?;
    } else {
        match opts.at {
            Some(row) => sequence.set_position(row),
            None => sequence.end(),
        };
        info!("Rendering at row {}", sequence.position());
        let planes = render(sequence.codes(), sequence.position(), opts.resolution);
        total_save_time += save_planes(opts, &planes, 0)?;
    }

    info!("Total save time: {:.3} s", total_save_time.as_secs_f64());
    info!("Total time: {:.3} s", start.elapsed().as_secs_f64());

    Ok(())
}

fn save_planes(opts: &RenderOpts, planes: &Planes, index: u32) -> Result<Duration> {
    let now = Instant::now();
    let base = make_basename(opts, index);

    save_plane(opts, &planes.visual, &format!("{}-visual.png", base))?;
    save_plane(opts, &planes.priority, &format!("{}-priority.png", base))?;

    Ok(now.elapsed())
}

fn save_plane(opts: &RenderOpts, plane: &RasterPlane, filename: &str) -> Result<()> {
    let mut img = image::RgbaImage::from_raw(
        plane.width() as u32,
        plane.height() as u32,
        plane.to_rgba(false),
    )
    .context("Plane size does not match its contents")?;

    let scale = opts.resolution.display_scale_x();
    if opts.stretch && scale > 1 {
        img = image::imageops::resize(
            &img,
            img.width() * scale,
            img.height(),
            image::imageops::FilterType::Nearest,
        );
    }

    info!("Saving {}", filename);
    img.save(filename)
        .with_context(|| format!("Couldn't save {}", filename))
}

fn make_basename(opts: &RenderOpts, index: u32) -> String {
    let base = if opts.output_file.is_empty() {
        Path::new(opts.input_file)
            .with_extension("")
            .to_string_lossy()
            .into_owned()
    } else {
        opts.output_file.to_string()
    };

    if index != 0 {
        format!("{}-{}", base, index)
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts<'a>(input_file: &'a str, output_file: &'a str) -> RenderOpts<'a> {
        RenderOpts {
            input_file,
            output_file,
            at: None,
            output_every: None,
            resolution: Resolution::Legacy,
            stretch: false,
        }
    }

    #[test]
    fn test_basename() {
        assert_eq!(make_basename(&opts("pic.12", ""), 0), "pic");
        assert_eq!(make_basename(&opts("PICTURE", ""), 3), "PICTURE-3");
        assert_eq!(make_basename(&opts("pic.12", "out"), 0), "out");
        assert_eq!(make_basename(&opts("pic.12", "out"), 2), "out-2");
        assert_eq!(make_basename(&opts("dir.v1/PICTURE", ""), 0), "dir.v1/PICTURE");
        assert_eq!(make_basename(&opts("dir.v1/pic.12", ""), 1), "dir.v1/pic-1");
    }
}

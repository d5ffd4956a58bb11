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


use clap::{Parser, Subcommand};
use tracing::Level;

use piccore::paint::Resolution;
use picedit_cli::dump::{check_picture, dump_picture};
use picedit_cli::renderer::*;

#[derive(Parser)]
#[clap(version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    /// Show debug messages
    #[clap(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the code listing of a picture
    Dump {
        /// Input file
        #[clap(value_parser)]
        input: String,

        /// Picture uses the wide 320x190 canvas
        #[clap(short, long)]
        wide: bool,
    },
    /// Render a picture to PNG images
    Render {
        /// Input file
        #[clap(value_parser)]
        input: String,

        /// Output file base name
        #[clap(value_parser)]
        output: Option<String>,

        /// Render with the cursor at this row
        #[clap(short, long, value_parser, conflicts_with = "every")]
        at: Option<usize>,

        /// Save images every n actions
        #[clap(short, long, value_parser)]
        every: Option<u32>,

        /// Picture uses the wide 320x190 canvas
        #[clap(short, long)]
        wide: bool,

        /// Stretch legacy pictures to their display aspect ratio
        #[clap(short, long)]
        stretch: bool,
    },
    /// Check that a picture is valid and survives a round trip
    Check {
        /// Input file
        #[clap(value_parser)]
        input: String,
    },
}

fn resolution(wide: bool) -> Resolution {
    if wide {
        Resolution::Wide
    } else {
        Resolution::Legacy
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(if cli.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Dump { input, wide } => dump_picture(&input, resolution(wide)),
        Commands::Render {
            input,
            output,
            at,
            every,
            wide,
            stretch,
        } => {
            let opts = RenderOpts {
                input_file: &input,
                output_file: output.as_deref().unwrap_or_default(),
                at,
                output_every: every,
                resolution: resolution(wide),
                stretch,
            };

            render_picture(&opts)
        }
        Commands::Check { input } => check_picture(&input),
    }
}

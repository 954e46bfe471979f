// RIB Storage: Comparison of Route Information Base Sizes Across Routing Protocols and Topologies
// Copyright (C) 2024-2025 Roland Schmid <roschmi@ethz.ch> and Tibor Schneider <sctibor@ethz.ch>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
use std::{path::PathBuf, process};

use clap::Parser;

use rib_storage::{prelude::*, util};

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
/// Show the route information base storage of each routing protocol per topology.
struct Args {
    /// Directory containing the `<protocol>_storage.txt` sample files.
    #[arg(short, long, default_value = "./")]
    data_path: PathBuf,
    /// JSON file overwriting the protocols, topologies, or chart style.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    util::init_logging()?;

    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{e}");
        process::exit(1)
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), Error> {
    let config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from {path:?}");
            StorageConfig::from_file(path)?
        }
        None => StorageConfig::default(),
    };

    let wide = assemble(&config, &args.data_path)?;
    let long = melt(&wide);
    validate(&long, &config.topologies, &config.protocols())?;

    render(&long, &config.chart);
    Ok(())
}

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
//! Reading storage samples from plain text files.
use std::{fs, path::Path};

use crate::Error;

/// Read one floating point value per non-blank line of `path`, preserving the file order.
///
/// Lines are trimmed before parsing, and lines that are empty after trimming are skipped. Any line
/// that does not parse aborts the read, no partial result is returned.
pub fn read_samples(path: impl AsRef<Path>) -> Result<Vec<f64>, Error> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let samples = parse_samples(path, &content)?;
    log::debug!("Read {} samples from {path:?}", samples.len());
    Ok(samples)
}

fn parse_samples(path: &Path, content: &str) -> Result<Vec<f64>, Error> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line, content)| {
            content.parse::<f64>().map_err(|source| Error::Parse {
                path: path.to_path_buf(),
                line,
                content: content.to_string(),
                source,
            })
        })
        .collect()
}

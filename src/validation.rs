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
//! Checks performed on the long table before it is handed to the chart renderer.
use std::collections::HashSet;

use crate::{reshape::LongTable, Error};

/// Check that `table` holds exactly one finite storage size for every combination of the expected
/// topologies and protocols, and nothing else.
pub fn validate(
    table: &LongTable,
    topologies: &[impl AsRef<str>],
    protocols: &[impl AsRef<str>],
) -> Result<(), Error> {
    if table.is_empty() {
        return Err(Error::EmptyTable);
    }

    let topologies: HashSet<&str> = topologies.iter().map(|t| t.as_ref()).collect();
    let protocols: HashSet<&str> = protocols.iter().map(|p| p.as_ref()).collect();

    let mut seen = HashSet::new();
    for row in table.rows() {
        if !topologies.contains(row.topology.as_str()) {
            return Err(Error::UnexpectedLabel {
                kind: "topology",
                name: row.topology.clone(),
            });
        }
        if !protocols.contains(row.protocol.as_str()) {
            return Err(Error::UnexpectedLabel {
                kind: "protocol",
                name: row.protocol.clone(),
            });
        }
        if !seen.insert((row.topology.as_str(), row.protocol.as_str())) {
            return Err(Error::DuplicateEntry {
                topology: row.topology.clone(),
                protocol: row.protocol.clone(),
            });
        }
        if !row.storage_size.is_finite() {
            return Err(Error::NonFiniteValue {
                topology: row.topology.clone(),
                protocol: row.protocol.clone(),
                value: row.storage_size,
            });
        }
    }

    let expected = topologies.len() * protocols.len();
    if table.len() != expected {
        // all rows are distinct and known, so some pair must be missing
        for topology in table.topologies() {
            for protocol in table.protocols() {
                if !seen.contains(&(topology, protocol)) {
                    return Err(Error::MissingEntry {
                        topology: topology.to_string(),
                        protocol: protocol.to_string(),
                    });
                }
            }
        }
        return Err(Error::RowCount {
            expected,
            got: table.len(),
        });
    }

    log::debug!("Validated storage table with {} rows", table.len());
    Ok(())
}

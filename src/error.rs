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
//! Error type shared by all stages of the storage pipeline.

use std::{num::ParseFloatError, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not parse line {line} of {path:?} as a number ({content:?}): {source}")]
    Parse {
        path: PathBuf,
        line: usize,
        content: String,
        source: ParseFloatError,
    },
    #[error("Expected {expected} values for protocol {protocol} in {path:?}, got {got} ({detail})")]
    LengthMismatch {
        protocol: String,
        path: PathBuf,
        expected: usize,
        got: usize,
        detail: String,
    },
    #[error("Expected {expected} values in column {protocol}, got {got} ({detail})")]
    ColumnLength {
        protocol: String,
        expected: usize,
        got: usize,
        detail: String,
    },
    #[error("Topology {0} appears more than once")]
    DuplicateTopology(String),
    #[error("Protocol {0} appears more than once")]
    DuplicateProtocol(String),
    #[error("Found more than one value for topology {topology} and protocol {protocol}")]
    DuplicateEntry { topology: String, protocol: String },
    #[error("No value for topology {topology} and protocol {protocol}")]
    MissingEntry { topology: String, protocol: String },
    #[error("Unexpected {kind} {name} in the storage table")]
    UnexpectedLabel { kind: &'static str, name: String },
    #[error("Expected {expected} rows in the storage table, got {got}")]
    RowCount { expected: usize, got: usize },
    #[error("The storage table is empty")]
    EmptyTable,
    #[error("Storage size for topology {topology} and protocol {protocol} is not finite: {value}")]
    NonFiniteValue {
        topology: String,
        protocol: String,
        value: f64,
    },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Could not parse configuration {path:?}: {source}")]
    ConfigFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Error {
    /// Build a [`Error::LengthMismatch`] naming the first topology without a value, or the
    /// number of surplus values.
    pub(crate) fn length_mismatch(
        protocol: impl Into<String>,
        path: impl Into<PathBuf>,
        topologies: &[String],
        got: usize,
    ) -> Self {
        Self::LengthMismatch {
            protocol: protocol.into(),
            path: path.into(),
            expected: topologies.len(),
            got,
            detail: length_detail(topologies, got),
        }
    }

    /// Build a [`Error::ColumnLength`] for a table column that does not hold one value per
    /// topology.
    pub(crate) fn column_length(
        protocol: impl Into<String>,
        topologies: &[String],
        got: usize,
    ) -> Self {
        Self::ColumnLength {
            protocol: protocol.into(),
            expected: topologies.len(),
            got,
            detail: length_detail(topologies, got),
        }
    }
}

fn length_detail(topologies: &[String], got: usize) -> String {
    match topologies.get(got) {
        Some(topology) => format!("no value for topology {topology}"),
        None => format!("{} surplus values", got - topologies.len()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn length_mismatch_names_missing_topology() {
        let topologies = ["Abilene", "AT&T", "CERNET", "GEANT"].map(String::from);
        let err = Error::length_mismatch("ospf", "ospf_storage.txt", &topologies, 3);
        assert_eq!(
            err.to_string(),
            "Expected 4 values for protocol ospf in \"ospf_storage.txt\", got 3 \
             (no value for topology GEANT)"
        );

        let err = Error::length_mismatch("ddr", "ddr_storage.txt", &topologies, 6);
        assert!(err.to_string().ends_with("got 6 (2 surplus values)"));
    }

    #[test]
    fn column_length_has_no_path() {
        let topologies = ["Abilene", "AT&T"].map(String::from);
        let err = Error::column_length("dgr", &topologies, 1);
        assert_eq!(
            err.to_string(),
            "Expected 2 values in column dgr, got 1 (no value for topology AT&T)"
        );
    }
}

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
//! Assembling the per-protocol samples into a wide table with one row per topology.
use std::{collections::HashSet, path::Path};

use itertools::Itertools;

use crate::{config::StorageConfig, reader::read_samples, util::PathBufExt, Error};

/// Storage samples of a single protocol, one value per topology.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSequence {
    pub protocol: String,
    pub values: Vec<f64>,
}

/// Table with one row per topology and one column per protocol.
///
/// Row `i` holds the `i`-th value of every protocol column and belongs to the `i`-th topology.
/// All columns have exactly one value per topology.
#[derive(Debug, Clone, PartialEq)]
pub struct WideTable {
    topologies: Vec<String>,
    columns: Vec<SampleSequence>,
}

impl WideTable {
    /// Create a new table, checking that every column has one value per topology and that no
    /// topology or protocol name is used twice.
    pub fn new(topologies: Vec<String>, columns: Vec<SampleSequence>) -> Result<Self, Error> {
        let mut seen = HashSet::new();
        if let Some(dup) = topologies.iter().find(|t| !seen.insert(t.as_str())) {
            return Err(Error::DuplicateTopology(dup.clone()));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = columns.iter().find(|c| !seen.insert(c.protocol.as_str())) {
            return Err(Error::DuplicateProtocol(dup.protocol.clone()));
        }
        if let Some(column) = columns.iter().find(|c| c.values.len() != topologies.len()) {
            return Err(Error::column_length(
                &column.protocol,
                &topologies,
                column.values.len(),
            ));
        }

        Ok(Self {
            topologies,
            columns,
        })
    }

    pub fn topologies(&self) -> &[String] {
        &self.topologies
    }

    /// Protocol names in column order.
    pub fn protocols(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.protocol.as_str())
    }

    pub fn columns(&self) -> &[SampleSequence] {
        &self.columns
    }

    pub fn column(&self, protocol: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.protocol == protocol)
            .map(|c| c.values.as_slice())
    }

    pub fn value(&self, topology: &str, protocol: &str) -> Option<f64> {
        let row = self.topologies.iter().position(|t| t == topology)?;
        self.column(protocol).map(|values| values[row])
    }

    pub fn num_rows(&self) -> usize {
        self.topologies.len()
    }

    /// Number of columns, including the topology column.
    pub fn num_columns(&self) -> usize {
        self.columns.len() + 1
    }
}

/// Read the samples of every configured protocol from `data_dir` and combine them into a
/// [`WideTable`].
///
/// Each file must hold exactly one value per configured topology. A file with fewer or more values
/// fails with [`Error::LengthMismatch`] before any table is built.
pub fn assemble(config: &StorageConfig, data_dir: impl AsRef<Path>) -> Result<WideTable, Error> {
    config.validate()?;
    let data_dir = data_dir.as_ref();

    let columns = config
        .sources
        .iter()
        .map(|source| {
            let path = data_dir.then(&source.file);
            let values = read_samples(&path)?;
            if values.len() != config.topologies.len() {
                return Err(Error::length_mismatch(
                    &source.protocol,
                    path,
                    &config.topologies,
                    values.len(),
                ));
            }
            log::debug!(
                "{}: {}",
                source.protocol,
                config
                    .topologies
                    .iter()
                    .zip(&values)
                    .map(|(topo, value)| format!("{topo}={value}"))
                    .join(", ")
            );
            Ok(SampleSequence {
                protocol: source.protocol.clone(),
                values,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let table = WideTable::new(config.topologies.clone(), columns)?;
    log::info!(
        "Assembled storage table with {} topologies and {} protocols",
        table.num_rows(),
        table.columns.len()
    );
    Ok(table)
}

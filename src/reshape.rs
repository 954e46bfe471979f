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
//! Converting between the wide table (one column per protocol) and the long table (one row per
//! topology and protocol).
use std::collections::HashMap;

use itertools::Itertools;
use serde::Serialize;

use crate::{
    dataset::{SampleSequence, WideTable},
    Error,
};

/// Storage size of one protocol on one topology.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongRow {
    pub topology: String,
    pub protocol: String,
    pub storage_size: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LongTable {
    rows: Vec<LongRow>,
}

impl From<Vec<LongRow>> for LongTable {
    fn from(rows: Vec<LongRow>) -> Self {
        Self { rows }
    }
}

impl LongTable {
    pub fn rows(&self) -> &[LongRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct topologies in the order they first appear.
    pub fn topologies(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.topology.as_str()).unique().collect()
    }

    /// Distinct protocols in the order they first appear.
    pub fn protocols(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.protocol.as_str()).unique().collect()
    }

    /// Storage size of the first row matching `topology` and `protocol`.
    pub fn get(&self, topology: &str, protocol: &str) -> Option<f64> {
        self.rows
            .iter()
            .find(|r| r.topology == topology && r.protocol == protocol)
            .map(|r| r.storage_size)
    }

    /// Pivot the table back into a [`WideTable`], with topologies and protocols in first-seen
    /// order. Every (topology, protocol) pair must occur exactly once.
    pub fn pivot(&self) -> Result<WideTable, Error> {
        let mut lookup: HashMap<(&str, &str), f64> = HashMap::new();
        for row in self.rows.iter() {
            let key = (row.topology.as_str(), row.protocol.as_str());
            if lookup.insert(key, row.storage_size).is_some() {
                return Err(Error::DuplicateEntry {
                    topology: row.topology.clone(),
                    protocol: row.protocol.clone(),
                });
            }
        }

        let topologies = self.topologies();
        let columns = self
            .protocols()
            .into_iter()
            .map(|protocol| {
                let values = topologies
                    .iter()
                    .map(|topology| {
                        lookup.get(&(*topology, protocol)).copied().ok_or_else(|| {
                            Error::MissingEntry {
                                topology: topology.to_string(),
                                protocol: protocol.to_string(),
                            }
                        })
                    })
                    .collect::<Result<Vec<_>, Error>>()?;
                Ok(SampleSequence {
                    protocol: protocol.to_string(),
                    values,
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        WideTable::new(topologies.into_iter().map(String::from).collect(), columns)
    }
}

/// Unpivot the wide table, keeping `topology` as identifier.
///
/// Rows are emitted per protocol column (in column order), and within each column per topology
/// (in row order).
pub fn melt(table: &WideTable) -> LongTable {
    table
        .columns()
        .iter()
        .flat_map(|column| {
            table
                .topologies()
                .iter()
                .zip(column.values.iter())
                .map(|(topology, value)| LongRow {
                    topology: topology.clone(),
                    protocol: column.protocol.clone(),
                    storage_size: *value,
                })
        })
        .collect_vec()
        .into()
}

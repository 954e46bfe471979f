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
//! Module describing which input files are loaded and how they are labeled.
//!
//! The defaults reproduce the storage experiment: four protocols, each with one
//! `<protocol>_storage.txt` file holding one value per topology in the order of
//! [`Topology::iter`].
use std::{collections::HashSet, fs, path::PathBuf};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{chart::ChartStyle, Error};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum_macros::EnumString,
)]
#[strum(serialize_all = "lowercase")]
/// Routing protocols compared in the storage experiment.
pub enum Protocol {
    Ospf,
    Ddr,
    Dgr,
    Octopus,
}

impl Protocol {
    /// Name of the file holding the storage samples of this protocol.
    pub fn file_name(&self) -> String {
        format!("{self}_storage.txt")
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum_macros::EnumString,
)]
/// Topologies on which the storage was measured, in the order their values appear in each file.
pub enum Topology {
    Abilene,
    #[strum(serialize = "AT&T")]
    Att,
    #[strum(serialize = "CERNET")]
    Cernet,
    #[strum(serialize = "GEANT")]
    Geant,
}

/// A file containing the samples of a single protocol.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct InputSource {
    pub protocol: String,
    /// Path of the sample file, relative to the data directory unless absolute.
    pub file: PathBuf,
}

impl From<Protocol> for InputSource {
    fn from(protocol: Protocol) -> Self {
        Self {
            protocol: protocol.to_string(),
            file: PathBuf::from(protocol.file_name()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Topology labels, assigned by position to the lines of every input file.
    pub topologies: Vec<String>,
    /// One input file per protocol, in the order in which protocols appear in the chart.
    pub sources: Vec<InputSource>,
    pub chart: ChartStyle,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            topologies: Topology::iter().map(|t| t.to_string()).collect(),
            sources: Protocol::iter().map(InputSource::from).collect(),
            chart: ChartStyle::default(),
        }
    }
}

impl StorageConfig {
    /// Load a configuration from a JSON file. Fields missing in the file keep their defaults.
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();
        let serialized = fs::read_to_string(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        let config: Self = serde_json::from_str(&serialized)
            .map_err(|source| Error::ConfigFormat { path, source })?;
        config.validate()?;
        Ok(config)
    }

    /// Protocol names in definition order.
    pub fn protocols(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.protocol.clone()).collect()
    }

    /// Check that both label sets are non-empty and free of duplicates.
    pub fn validate(&self) -> Result<(), Error> {
        if self.topologies.is_empty() {
            return Err(Error::Config("no topologies are configured".to_string()));
        }
        if self.sources.is_empty() {
            return Err(Error::Config("no input sources are configured".to_string()));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = self.topologies.iter().find(|t| !seen.insert(t.as_str())) {
            return Err(Error::DuplicateTopology(dup.clone()));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = self.sources.iter().find(|s| !seen.insert(s.protocol.as_str())) {
            return Err(Error::DuplicateProtocol(dup.protocol.clone()));
        }
        Ok(())
    }
}

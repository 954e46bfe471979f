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
//! Library for comparing the route information base (RIB) storage of routing protocols across
//! network topologies.
//!
//! The pipeline is strictly sequential: [`dataset::assemble`] reads one sample file per protocol
//! and builds a [`dataset::WideTable`], [`reshape::melt`] turns it into a
//! [`reshape::LongTable`], [`validation::validate`] checks the long table, and
//! [`chart::render`] shows it as a grouped bar chart.

pub mod chart;
pub mod config;
pub mod dataset;
mod error;
pub mod reader;
pub mod reshape;
pub mod util;
pub mod validation;

#[cfg(test)]
mod test;

pub use error::Error;

pub mod prelude {
    pub use super::{
        chart::{build_chart, render, ChartStyle},
        config::{InputSource, Protocol, StorageConfig, Topology},
        dataset::{assemble, SampleSequence, WideTable},
        reader::read_samples,
        reshape::{melt, LongRow, LongTable},
        validation::validate,
        Error,
    };
}

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
//! End-to-end tests of the storage pipeline, reading sample files from a temporary directory.

use std::{fs, path::Path};

use itertools::Itertools;

use crate::prelude::*;

fn write_samples(dir: &Path, protocol: Protocol, content: &str) {
    fs::write(dir.join(protocol.file_name()), content).unwrap();
}

/// Writes the default experiment: `ospf` holds 10..40, `ddr` 11..41, `dgr` 12..42 and `octopus`
/// 13..43.
fn default_experiment() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_samples(dir.path(), Protocol::Ospf, "10.0\n20.0\n30.0\n40.0\n");
    write_samples(dir.path(), Protocol::Ddr, "11.0\n21.0\n31.0\n41.0\n");
    write_samples(dir.path(), Protocol::Dgr, "12.0\n22.0\n32.0\n42.0\n");
    write_samples(dir.path(), Protocol::Octopus, "13.0\n23.0\n33.0\n43.0\n");
    dir
}

#[test]
fn wide_table_shape() {
    let dir = default_experiment();
    let wide = assemble(&StorageConfig::default(), dir.path()).unwrap();

    assert_eq!(wide.num_rows(), 4);
    assert_eq!(wide.num_columns(), 5);
    assert_eq!(
        wide.protocols().collect_vec(),
        vec!["ospf", "ddr", "dgr", "octopus"]
    );
    assert_eq!(wide.value("AT&T", "dgr"), Some(22.0));
}

#[test]
fn long_table() {
    let dir = default_experiment();
    let config = StorageConfig::default();
    let long = melt(&assemble(&config, dir.path()).unwrap());

    assert_eq!(long.len(), 16);
    assert!(long.rows().contains(&LongRow {
        topology: "Abilene".to_string(),
        protocol: "ospf".to_string(),
        storage_size: 10.0,
    }));
    assert!(long.rows().contains(&LongRow {
        topology: "GEANT".to_string(),
        protocol: "octopus".to_string(),
        storage_size: 43.0,
    }));
    assert_eq!(
        long.rows()
            .iter()
            .filter(|r| r.topology == "Abilene" && r.protocol == "ospf")
            .count(),
        1
    );

    validate(&long, &config.topologies, &config.protocols()).unwrap();
}

#[test]
fn long_table_order() {
    let dir = default_experiment();
    let long = melt(&assemble(&StorageConfig::default(), dir.path()).unwrap());

    let protocols = long.rows().iter().map(|r| r.protocol.as_str()).dedup().collect_vec();
    assert_eq!(protocols, vec!["ospf", "ddr", "dgr", "octopus"]);
    for chunk in long.rows().chunks(4) {
        assert_eq!(
            chunk.iter().map(|r| r.topology.as_str()).collect_vec(),
            vec!["Abilene", "AT&T", "CERNET", "GEANT"]
        );
    }
}

#[test]
fn pivot_round_trip() {
    let dir = default_experiment();
    let wide = assemble(&StorageConfig::default(), dir.path()).unwrap();
    assert_eq!(melt(&wide).pivot().unwrap(), wide);
}

#[test]
fn blank_lines_are_skipped() {
    let dir = default_experiment();
    write_samples(dir.path(), Protocol::Dgr, "\n12.0\n\n  \n22.0\n32.0\n42.0\n\n");

    let wide = assemble(&StorageConfig::default(), dir.path()).unwrap();
    assert_eq!(wide.column("dgr"), Some([12.0, 22.0, 32.0, 42.0].as_slice()));
}

#[test]
fn short_file_is_rejected() {
    let dir = default_experiment();
    write_samples(dir.path(), Protocol::Ddr, "11.0\n21.0\n31.0\n");

    match assemble(&StorageConfig::default(), dir.path()) {
        Err(Error::LengthMismatch {
            protocol,
            path,
            expected,
            got,
            detail,
        }) => {
            assert_eq!(protocol, "ddr");
            assert_eq!(path, dir.path().join("ddr_storage.txt"));
            assert_eq!((expected, got), (4, 3));
            assert_eq!(detail, "no value for topology GEANT");
        }
        x => panic!("expected a length mismatch, got {x:?}"),
    }
}

#[test]
fn long_file_is_rejected() {
    let dir = default_experiment();
    write_samples(dir.path(), Protocol::Octopus, "1\n2\n3\n4\n5\n");

    assert!(matches!(
        assemble(&StorageConfig::default(), dir.path()),
        Err(Error::LengthMismatch { got: 5, .. })
    ));
}

#[test]
fn missing_file_is_fatal() {
    let dir = default_experiment();
    fs::remove_file(dir.path().join("ospf_storage.txt")).unwrap();

    assert!(matches!(
        assemble(&StorageConfig::default(), dir.path()),
        Err(Error::Io { .. })
    ));
}

#[test]
fn non_numeric_line_is_fatal() {
    let dir = default_experiment();
    write_samples(dir.path(), Protocol::Octopus, "13.0\nn/a\n33.0\n43.0\n");

    assert!(matches!(
        assemble(&StorageConfig::default(), dir.path()),
        Err(Error::Parse { line: 2, .. })
    ));
}

#[test]
fn custom_labels() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bgp.txt"), "5\n6\n").unwrap();
    fs::write(dir.path().join("isis.txt"), "7\n8\n").unwrap();

    let config = StorageConfig {
        topologies: vec!["Path_3".to_string(), "Star_5".to_string()],
        sources: vec![
            InputSource {
                protocol: "bgp".to_string(),
                file: "bgp.txt".into(),
            },
            InputSource {
                protocol: "isis".to_string(),
                file: "isis.txt".into(),
            },
        ],
        ..Default::default()
    };

    let long = melt(&assemble(&config, dir.path()).unwrap());
    validate(&long, &config.topologies, &config.protocols()).unwrap();
    assert_eq!(long.get("Star_5", "isis"), Some(8.0));

    let plot: serde_json::Value =
        serde_json::from_str(&build_chart(&long, &config.chart).to_json()).unwrap();
    assert_eq!(plot["data"].as_array().unwrap().len(), 2);
}

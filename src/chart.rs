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
//! Grouped bar chart of the storage sizes, one group per topology and one bar per protocol.
use plotly::{
    color::Rgb,
    common::{Marker, Title},
    layout::{Axis, AxisType, BarMode, Legend},
    Bar, Layout, Plot,
};
use serde::{Deserialize, Serialize};

use crate::reshape::LongTable;

/// Seaborn's "deep" qualitative palette.
pub const DEEP_PALETTE: [(u8, u8, u8); 10] = [
    (76, 114, 176),
    (221, 132, 82),
    (85, 168, 104),
    (196, 78, 82),
    (129, 114, 179),
    (147, 120, 96),
    (218, 139, 195),
    (140, 140, 140),
    (204, 185, 116),
    (100, 181, 205),
];

const GRID_COLOR: (u8, u8, u8) = (234, 234, 242);
const WHITE: (u8, u8, u8) = (255, 255, 255);

/// Static styling of the storage chart.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChartStyle {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend_title: String,
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// Bar colors, assigned to protocols in order and cycled if there are more protocols.
    pub palette: Vec<(u8, u8, u8)>,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: "Route Information Base Size for Different Routing Protocols".to_string(),
            x_label: "Topology".to_string(),
            y_label: "Route Information Base Size (kB)".to_string(),
            legend_title: "Protocol".to_string(),
            width: 1200,
            height: 600,
            palette: DEEP_PALETTE.to_vec(),
        }
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Rgb {
    Rgb::new(r, g, b)
}

/// Build the grouped bar chart for `table`.
///
/// Topologies appear on the x-axis in the order they first occur in the table. Each protocol
/// becomes one trace, so bars of the same protocol share their color across all groups. A
/// topology without a value for some protocol leaves a gap in its group.
pub fn build_chart(table: &LongTable, style: &ChartStyle) -> Plot {
    let topologies = table.topologies();

    let mut plot = Plot::new();
    for (i, protocol) in table.protocols().into_iter().enumerate() {
        let (x, y): (Vec<String>, Vec<f64>) = topologies
            .iter()
            .filter_map(|topology| {
                table
                    .get(topology, protocol)
                    .map(|value| (topology.to_string(), value))
            })
            .unzip();

        let mut trace = Bar::new(x, y).name(protocol);
        if !style.palette.is_empty() {
            let color = style.palette[i % style.palette.len()];
            trace = trace.marker(Marker::new().color(rgb(color)));
        }
        plot.add_trace(trace);
    }

    let layout = Layout::new()
        .title(Title::with_text(&style.title))
        .bar_mode(BarMode::Group)
        .width(style.width)
        .height(style.height)
        .plot_background_color(rgb(WHITE))
        .paper_background_color(rgb(WHITE))
        .x_axis(
            Axis::new()
                .title(Title::with_text(&style.x_label))
                .type_(AxisType::Category)
                .show_grid(false),
        )
        .y_axis(
            Axis::new()
                .title(Title::with_text(&style.y_label))
                .show_grid(true)
                .grid_color(rgb(GRID_COLOR)),
        )
        .legend(Legend::new().title(Title::with_text(&style.legend_title)));
    plot.set_layout(layout);

    plot
}

/// Build the chart for `table` and open it on the interactive display (the default browser).
pub fn render(table: &LongTable, style: &ChartStyle) {
    let plot = build_chart(table, style);
    log::info!(
        "Showing storage chart for {} topologies and {} protocols",
        table.topologies().len(),
        table.protocols().len()
    );
    plot.show();
}

/// Chart construction: pure builders turning aggregated data into
/// plain-data chart specifications.
///
/// Architecture:
/// ```text
///                 FilteredView (record indices)
///                 │            │             │
///                 ▼            ▼             ▼
///           ┌─────────┐  ┌──────────┐  ┌──────────┐
///           │   bar    │  │  radar    │  │ scatter   │
///           └─────────┘  └──────────┘  └──────────┘
///                 │            │             │
///                 ▼            ▼             ▼
///              BarChartSpec RadarChartSpec ScatterChartSpec
/// ```
///
/// The builders never touch egui; `ui::charts` consumes the specs and
/// draws them with `egui_plot`.
pub mod bar;
pub mod radar;
pub mod scatter;

use bar::BarChartSpec;
use radar::RadarChartSpec;
use scatter::ScatterChartSpec;

/// Everything one filter pass produces for the rendering layer.
#[derive(Debug, Clone)]
pub struct ChartSet {
    pub bar: BarChartSpec,
    pub radar: RadarChartSpec,
    pub scatter: ScatterChartSpec,
}

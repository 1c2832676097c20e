// File: crates/laureate-core/src/lib.rs
// Summary: Core library entry point; exports the load -> aggregate -> scale -> draw API.

pub mod error;
pub mod record;
pub mod category;
pub mod aggregate;
pub mod grid;
pub mod axis;
pub mod scale;
pub mod scene;
pub mod types;
pub mod theme;
pub mod text;
pub mod chart;

pub use error::{ChartError, Result};
pub use record::{load_csv_path, load_csv_reader, records_from_rows, Record};
pub use category::{categorize, CategoryGroup, STEM_CATEGORIES};
pub use aggregate::AggregationTable;
pub use axis::{Axis, AxisOrient, Tick, TickFormat};
pub use scale::{ColorScale, LinearScale, ScaleSpec};
pub use scene::{build_scene, DrawCommand, LegendEntry, LineSeries, Scene, TextAnchor, TextItem};
pub use types::Insets;
pub use theme::Theme;
pub use text::TextShaper;
pub use chart::{Chart, RenderOptions};

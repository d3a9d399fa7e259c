//! Sunshine heatmap rendering.
//!
//! Renders a city-by-month sunshine-hours grid to a PNG image:
//! - Fixed dataset with derived annual totals
//! - Piecewise multi-stop color scale with contrast-aware cell text
//! - Deterministic layout and draw sequence
//! - Hand-rolled RGBA PNG encoding

pub mod canvas;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod layout;
pub mod png;
pub mod scale;
pub mod style;

pub use chart::{HeatmapChart, Theme};
pub use dataset::{cities, value_range, City, MONTHS};
pub use error::{ChartError, ChartResult};
pub use layout::{Layout, LayoutConfig};
pub use scale::{ColorScale, Rgb, DEFAULT_STOPS};
pub use style::StyleConfig;

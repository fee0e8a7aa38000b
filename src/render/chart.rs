//! Chart rendering seam.
//!
//! The dashboard does not draw anything itself: it prepares a [`ChartSpec`]
//! (labels plus datasets) and hands it to a [`ChartBackend`] implementation.
//! Backends typically hold canvas-bound state per drawn chart, so a
//! [`ChartSlot`] owns at most one live instance and always releases the
//! previous one before drawing a replacement.

use crate::render::error::RenderError;
use crate::series::reshape::{ForecastSeries, SeriesSet, AQI_SERIES};

/// An RGB color for a dataset line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Which vertical axis a dataset is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Left,
    Right,
}

/// How the area under a dataset line is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Plain line.
    None,
    /// Fill from the line down to the chart baseline.
    ToBaseline,
}

/// One line on a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub points: Vec<f64>,
    pub color: Rgb,
    pub axis: Axis,
    pub fill: Fill,
}

/// Everything a backend needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSpec {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartSpec {
    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

/// External chart-drawing capability.
///
/// `Instance` represents one drawn chart holding backend resources; dropping
/// it must release them.
pub trait ChartBackend {
    type Instance;

    /// Draws `spec` and returns a handle to the live chart.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Backend`] when the backend rejects the spec.
    fn draw(&mut self, spec: &ChartSpec) -> Result<Self::Instance, RenderError>;
}

/// Owns the single live chart bound to one drawing surface.
///
/// Re-rendering unconditionally destroys the previous instance first, so two
/// renders in a row leave exactly one live chart, never two.
pub struct ChartSlot<B: ChartBackend> {
    backend: B,
    live: Option<B::Instance>,
}

impl<B: ChartBackend> ChartSlot<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            live: None,
        }
    }

    /// Replaces the current chart with one drawn from `spec`.
    ///
    /// An empty spec only clears the slot; nothing new is drawn. When the
    /// backend fails, the previous instance is already gone and the slot
    /// stays empty.
    ///
    /// # Errors
    ///
    /// Propagates [`RenderError`] from the backend.
    pub fn render(&mut self, spec: &ChartSpec) -> Result<(), RenderError> {
        // Release the previous canvas-bound instance before drawing.
        self.live = None;
        if spec.is_empty() {
            return Ok(());
        }
        self.live = Some(self.backend.draw(spec)?);
        Ok(())
    }

    /// Destroys the live chart, if any.
    pub fn clear(&mut self) {
        self.live = None;
    }

    /// Whether a drawn chart currently exists.
    pub fn has_live_chart(&self) -> bool {
        self.live.is_some()
    }
}

/// The nine datasets of the air-quality line chart.
///
/// Mirrors the dashboard's chart configuration: the AQI and every pollutant
/// on the left axis, except carbon monoxide which gets the secondary right
/// axis because its concentrations dwarf the others.
const AIR_QUALITY_DATASETS: &[(&str, &str, Rgb, Axis)] = &[
    (AQI_SERIES, "Air quality index", Rgb(75, 192, 192), Axis::Left),
    ("co", "Carbon monoxide (CO)", Rgb(75, 130, 192), Axis::Right),
    ("nh3", "Ammonia (NH3)", Rgb(192, 75, 130), Axis::Left),
    ("no", "Nitrogen monoxide (NO)", Rgb(192, 130, 75), Axis::Left),
    ("no2", "Nitrogen dioxide (NO2)", Rgb(130, 192, 75), Axis::Left),
    ("o3", "Ozone (O3)", Rgb(130, 75, 192), Axis::Left),
    ("pm2_5", "Fine particles (PM2.5)", Rgb(192, 192, 75), Axis::Left),
    ("pm10", "Coarse particles (PM10)", Rgb(75, 192, 130), Axis::Left),
    ("so2", "Sulphur dioxide (SO2)", Rgb(192, 75, 75), Axis::Left),
];

/// Builds the air-quality chart spec from a reshaped [`SeriesSet`].
///
/// Catalogue entries whose series is absent from `set` are skipped.
pub fn air_quality_chart(set: &SeriesSet) -> ChartSpec {
    ChartSpec {
        labels: set.date_labels.clone(),
        datasets: AIR_QUALITY_DATASETS
            .iter()
            .filter_map(|(key, label, color, axis)| {
                set.series.get(*key).map(|points| Dataset {
                    label: (*label).to_string(),
                    points: points.clone(),
                    color: *color,
                    axis: *axis,
                    fill: Fill::None,
                })
            })
            .collect(),
    }
}

/// Builds the temperature/precipitation chart spec from a [`ForecastSeries`].
pub fn forecast_chart(series: &ForecastSeries) -> ChartSpec {
    if series.labels.is_empty() {
        return ChartSpec::default();
    }
    ChartSpec {
        labels: series.labels.clone(),
        datasets: vec![
            Dataset {
                label: "Temperature".to_string(),
                points: series.temperatures.clone(),
                color: Rgb(130, 192, 75),
                axis: Axis::Left,
                fill: Fill::None,
            },
            Dataset {
                label: "Precipitation probability".to_string(),
                points: series.precipitation.clone(),
                color: Rgb(75, 192, 192),
                axis: Axis::Left,
                fill: Fill::ToBaseline,
            },
        ],
    }
}

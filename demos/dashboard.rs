//! Runs the full dashboard once against the real provider and prints the
//! three panels to stdout, drawing the charts through a minimal text backend.
//!
//! Requires SKYCAST_API_URL and SKYCAST_API_KEY in the environment.

use skycast::{
    air_quality_chart, forecast_chart, ChartBackend, ChartSlot, ChartSpec, Config, Dashboard,
    FixedPosition, RenderError, SkycastError, FALLBACK_POSITION,
};

/// A stand-in chart renderer: prints dataset summaries instead of drawing.
struct TextChart;

struct TextChartInstance;

impl ChartBackend for TextChart {
    type Instance = TextChartInstance;

    fn draw(&mut self, spec: &ChartSpec) -> Result<Self::Instance, RenderError> {
        println!("chart with {} points:", spec.labels.len());
        for dataset in &spec.datasets {
            let first = dataset.points.first().copied().unwrap_or(f64::NAN);
            let last = dataset.points.last().copied().unwrap_or(f64::NAN);
            println!(
                "  {:<32} {:>4} points, first {:.2}, last {:.2}",
                dataset.label,
                dataset.points.len(),
                first,
                last
            );
        }
        Ok(TextChartInstance)
    }
}

#[tokio::main]
async fn main() -> Result<(), SkycastError> {
    env_logger::init();

    let mut dashboard = Dashboard::builder().config(Config::from_env()?).build()?;
    dashboard.locate(&FixedPosition(FALLBACK_POSITION)).await;

    println!(
        "Weather for {}",
        dashboard.place_name().unwrap_or("unknown location")
    );
    println!();

    println!("{}", dashboard.current_conditions().header_date());
    for (label, value) in dashboard.current_conditions().rows() {
        println!("  {label:<22} {value}");
    }
    println!();

    let mut air_slot = ChartSlot::new(TextChart);
    for (index, interval) in dashboard.air_quality().intervals().iter().enumerate() {
        println!("[{index}] {}", interval.label);
    }
    if let Some(view) = dashboard.air_quality().view() {
        air_slot.render(&air_quality_chart(view))?;
    }
    println!();

    let mut forecast_slot = ChartSlot::new(TextChart);
    if let Some(view) = dashboard.forecast().view() {
        forecast_slot.render(&forecast_chart(view))?;
    }

    Ok(())
}

//! Fetches 90 days of air-quality history and prints the bucketed series
//! for each of the three intervals, without any chart backend.
//!
//! Requires SKYCAST_API_URL and SKYCAST_API_KEY in the environment.

use chrono::{Local, Utc};
use skycast::{
    build_intervals, dedup_by_day, filter_to_interval, reshape_air_quality, Config, SkycastError,
    WeatherApi, FALLBACK_POSITION, WINDOW_SECONDS,
};

#[tokio::main]
async fn main() -> Result<(), SkycastError> {
    env_logger::init();

    let config = Config::from_env()?;
    let api = WeatherApi::builder()
        .base_url(config.api_url)
        .api_key(config.api_key)
        .build()?;

    let now = Utc::now().timestamp();
    let samples = api
        .air_pollution_history(FALLBACK_POSITION, now - WINDOW_SECONDS, now)
        .await?;
    println!("{} raw samples", samples.len());

    let daily = dedup_by_day(&samples, &Local);
    println!("{} daily samples after bucketing", daily.len());

    for interval in build_intervals(now - WINDOW_SECONDS, now, &Local) {
        let windowed = filter_to_interval(&daily, &interval);
        let set = reshape_air_quality(&windowed, &Local);
        println!();
        println!("{}: {} days", interval.label, set.date_labels.len());
        for (key, values) in &set.series {
            let mean = values.iter().sum::<f64>() / values.len().max(1) as f64;
            println!("  {key:<6} mean {mean:.2}");
        }
    }

    Ok(())
}

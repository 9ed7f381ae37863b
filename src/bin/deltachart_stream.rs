//! Streams mock action data into a chart and reports the final scene
//!
//! A timer polls the mock source; each snapshot it publishes is rendered by the
//! controller (after the optional debounce window), exactly as a live dashboard
//! would re-render on every update.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, ValueEnum};
use comfy_table::{Cell, ContentArrangement, Table};
use deltachart::logging::init_tracing;
use deltachart::settings::AppSettings;
use deltachart::{
    ChartController, ChartRecord, DataSource, MetricDeriver, MockActionSource, RenderOutcome,
    ScaleMode, Scene, SeriesKey, SourceSettings,
};
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::IntervalStream;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    /// 300 ms cadence, no debounce
    User,
    /// 100 ms cadence, 500 ms debounce
    Admin,
}

#[derive(Debug, Parser)]
#[command(
    name = "deltachart-stream",
    version,
    about = "Render a streaming previous/current bar chart"
)]
struct Args {
    /// TOML settings file
    #[arg(short, long, env = "DELTACHART_CONFIG")]
    config: Option<PathBuf>,

    /// Stream preset; overrides the source section of the settings file
    #[arg(long, value_enum)]
    preset: Option<Preset>,

    /// Value-axis mode (linear or log)
    #[arg(long)]
    mode: Option<ScaleMode>,

    #[arg(long)]
    width: Option<f64>,

    #[arg(long)]
    height: Option<f64>,

    /// RNG seed for a reproducible stream
    #[arg(long)]
    seed: Option<u64>,

    /// Write the final scene as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Log level when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

impl Args {
    fn apply(&self, settings: &mut AppSettings) {
        if let Some(preset) = self.preset {
            let seed = settings.source.seed;
            settings.source = match preset {
                Preset::User => SourceSettings::user_actions(),
                Preset::Admin => SourceSettings::admin_actions(),
            };
            settings.source.seed = seed;
        }
        if let Some(mode) = self.mode {
            settings.chart.mode = mode;
        }
        if let Some(width) = self.width {
            settings.chart.width = width;
        }
        if let Some(height) = self.height {
            settings.chart.height = height;
        }
        if self.seed.is_some() {
            settings.source.seed = self.seed;
        }
        if let Some(level) = &self.log_level {
            settings.logging.level = level.clone();
        }
        if self.log_json {
            settings.logging.json = true;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut settings = AppSettings::load(args.config.as_deref()).context("loading settings")?;
    args.apply(&mut settings);
    settings.chart.validate().context("validating chart dimensions")?;

    init_tracing(&settings.logging.level, settings.logging.json)?;
    info!(
        width = settings.chart.width,
        height = settings.chart.height,
        mode = ?settings.chart.mode,
        interval_ms = settings.source.interval_ms,
        debounce_ms = settings.source.debounce_ms,
        "starting stream"
    );

    let (tx, mut rx) = mpsc::unbounded_channel::<Vec<ChartRecord>>();
    let mut source = MockActionSource::new(&settings.source);
    source.subscribe(Box::new(move |records| {
        // receiver gone means the renderer already stopped
        let _ = tx.send(records.to_vec());
    }));

    let mut interval = time::interval(settings.source.interval());
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let producer = tokio::spawn(async move {
        let mut ticks = IntervalStream::new(interval);
        while ticks.next().await.is_some() {
            if !source.poll() {
                break;
            }
        }
        source.snapshot().len()
    });

    let debounce = settings.source.debounce();
    let started = Instant::now();
    let mut controller = ChartController::new(Scene::new());
    let mut renders = 0usize;

    while let Some(mut latest) = rx.recv().await {
        if !debounce.is_zero() {
            while let Ok(Some(next)) = time::timeout(debounce, rx.recv()).await {
                latest = next;
            }
        }

        match controller.render(&latest, &settings.chart) {
            Ok(RenderOutcome::Rendered(summary)) => {
                renders += 1;
                info!(
                    categories = summary.categories,
                    shapes = controller.surface().len(),
                    "rendered snapshot"
                );
            }
            Ok(RenderOutcome::Skipped) => {}
            Err(err) => warn!(error = %err, "render rejected"),
        }
    }

    let produced = producer.await.context("source task panicked")?;
    info!(
        records = produced,
        renders,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "stream finished"
    );

    println!("{}", summary_table(&controller));

    if let Some(path) = &args.json {
        let json = controller.surface().to_json()?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), at = %Utc::now().to_rfc3339(), "scene written");
    }

    Ok(())
}

fn summary_table(controller: &ChartController<Scene>) -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Action", "Previous", "Current", "Delta", "Label"]);

    for record in controller.records() {
        let delta = MetricDeriver::percent_delta(record.prev_value, record.current_value);
        table.add_row(vec![
            Cell::new(&record.title),
            Cell::new(format!("{:.0}", record.value(SeriesKey::Previous))),
            Cell::new(format!("{:.0}", record.value(SeriesKey::Current))),
            Cell::new(MetricDeriver::delta_label(delta)),
            Cell::new(MetricDeriver::value_label(record.current_value)),
        ]);
    }

    table
}

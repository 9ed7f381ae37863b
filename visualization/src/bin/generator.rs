//! Sample chart generator for visual verification
//!
//! Renders a handful of fixed datasets through the chart engine and writes each
//! scene as SVG (and PNG when the feature is enabled) for eyeballing.

use deltachart::{ChartConfig, ChartController, ChartRecord, RenderOutcome, ScaleMode, Scene};
use deltachart_visualization::{
    errors::Result,
    export::{ChartExporter, SvgExporter},
    styles::SceneStyle,
};
use std::fs;
use std::path::Path;

fn main() -> Result<()> {
    println!("📊 Delta Chart Sample Generator");
    println!("===============================");

    let output_dir = Path::new("visualization/output");
    fs::create_dir_all(output_dir)?;

    generate_scenarios(output_dir)?;
    generate_scale_comparisons(output_dir)?;
    generate_size_variations(output_dir)?;

    println!("\n✅ Chart generation completed!");
    println!("📁 Check the 'visualization/output' directory for generated files");

    Ok(())
}

fn actions() -> Vec<ChartRecord> {
    vec![
        ChartRecord::new("Open", 120_000.0, 180_000.0),
        ChartRecord::new("Close", 950_000.0, 410_000.0),
        ChartRecord::new("Delete", 33_000.0, 12_000.0),
        ChartRecord::new("View", 640_000.0, 702_500.0),
        ChartRecord::new("Create", 0.0, 55_000.0),
    ]
}

fn render(data: &[ChartRecord], config: &ChartConfig) -> Result<Option<Scene>> {
    let mut controller = ChartController::new(Scene::new());
    match controller.render(data, config)? {
        RenderOutcome::Rendered(_) => Ok(Some(controller.into_surface())),
        RenderOutcome::Skipped => Ok(None),
    }
}

fn write(
    scene: &Scene,
    config: &ChartConfig,
    style: SceneStyle,
    output_dir: &Path,
    name: &str,
) -> Result<()> {
    let svg_path = output_dir.join(format!("{}.svg", name));
    SvgExporter::for_config(config)?
        .with_style(style)
        .export(scene, &svg_path)?;
    println!("  ✅ {}", svg_path.display());

    #[cfg(feature = "png_export")]
    {
        use deltachart_visualization::export::PngExporter;

        let png_path = output_dir.join(format!("{}.png", name));
        // bitmap text needs system fonts; a headless box may not have them
        match PngExporter::for_config(config)?.export(scene, &png_path) {
            Ok(()) => println!("  ✅ {}", png_path.display()),
            Err(e) => println!("  ⚠️  skipped {}: {}", png_path.display(), e),
        }
    }

    Ok(())
}

/// One chart per delta situation: growth, decline, unchanged, zero baseline
fn generate_scenarios(output_dir: &Path) -> Result<()> {
    println!("\n📈 Generating delta scenarios...");

    let scenarios = [
        ("01_growth", vec![ChartRecord::new("Open", 100_000.0, 150_000.0)]),
        ("02_decline", vec![ChartRecord::new("Close", 1_000_000.0, 500_000.0)]),
        ("03_unchanged", vec![ChartRecord::new("Delete", 750_000.0, 750_000.0)]),
        ("04_zero_previous", vec![ChartRecord::new("Create", 0.0, 100_000.0)]),
        ("05_all_actions", actions()),
    ];

    let config = ChartConfig::default();
    for (name, data) in &scenarios {
        if let Some(scene) = render(data, &config)? {
            write(&scene, &config, SceneStyle::default(), output_dir, name)?;
        }
    }

    Ok(())
}

/// Same data on a linear and a log value axis
fn generate_scale_comparisons(output_dir: &Path) -> Result<()> {
    println!("\n📏 Generating scale comparisons...");

    for (mode, name) in [(ScaleMode::Linear, "10_linear"), (ScaleMode::Log, "11_log")] {
        let config = ChartConfig::default().with_mode(mode);
        if let Some(scene) = render(&actions(), &config)? {
            write(&scene, &config, SceneStyle::default(), output_dir, name)?;
        }
    }

    Ok(())
}

fn generate_size_variations(output_dir: &Path) -> Result<()> {
    println!("\n📐 Generating size variations...");

    let sizes = [
        (400.0, 300.0, "20_small"),
        (1400.0, 1000.0, "21_large"),
        (1920.0, 600.0, "22_wide"),
    ];

    for &(width, height, name) in &sizes {
        let config = ChartConfig::new(width, height, ScaleMode::Linear);
        if let Some(scene) = render(&actions(), &config)? {
            write(&scene, &config, SceneStyle::default(), output_dir, name)?;
        }
    }

    let config = ChartConfig::default();
    if let Some(scene) = render(&actions(), &config)? {
        write(&scene, &config, SceneStyle::dark(), output_dir, "23_dark_background")?;
    }

    Ok(())
}

//! End-to-end render scenarios through the public controller API

use deltachart::binder::bar_id;
use deltachart::surface::{Rect, Text};
use deltachart::{
    ChartConfig, ChartController, ChartRecord, DrawingSurface, Glyph, Layer, Palette,
    RedrawPolicy, RenderOutcome, ScaleMode, Scene, SeriesKey, Shape,
};

fn render(data: &[ChartRecord], config: &ChartConfig) -> ChartController<Scene> {
    let mut controller = ChartController::new(Scene::new());
    controller.render(data, config).unwrap();
    controller
}

fn text<'a>(scene: &'a Scene, layer: Layer, title: &str) -> &'a Text {
    scene
        .get(&layer.id(title))
        .and_then(Shape::as_text)
        .unwrap_or_else(|| panic!("missing {:?} for {}", layer, title))
}

fn rect<'a>(scene: &'a Scene, title: &str, key: SeriesKey) -> &'a Rect {
    scene
        .get(&bar_id(title, key))
        .and_then(Shape::as_rect)
        .unwrap_or_else(|| panic!("missing bar {}/{}", title, key))
}

#[test]
fn test_scenario_growth() {
    let controller = render(&[ChartRecord::new("Open", 100.0, 150.0)], &ChartConfig::default());
    let scene = controller.surface();

    let delta = text(scene, Layer::DeltaLabels, "Open");
    assert_eq!(delta.content, format!("+50%{}", Glyph::Up));
    assert_eq!(delta.fill, Palette::POSITIVE);
    assert_eq!(rect(scene, "Open", SeriesKey::Current).fill, Palette::POSITIVE);
    assert_eq!(rect(scene, "Open", SeriesKey::Previous).fill, Palette::NEUTRAL);

    // 150 is well under half a thousand
    assert_eq!(text(scene, Layer::ValueLabels, "Open").content, "0K");
}

#[test]
fn test_scenario_decline() {
    let controller = render(&[ChartRecord::new("Close", 1000.0, 500.0)], &ChartConfig::default());
    let scene = controller.surface();

    let delta = text(scene, Layer::DeltaLabels, "Close");
    assert_eq!(delta.content, format!("-50%{}", Glyph::Down));
    assert_eq!(delta.fill, Palette::NEGATIVE);
    assert_eq!(rect(scene, "Close", SeriesKey::Current).fill, Palette::NEGATIVE);
    assert_eq!(text(scene, Layer::ValueLabels, "Close").content, "1K");
}

#[test]
fn test_scenario_empty_input() {
    let mut controller = ChartController::new(Scene::new());
    let outcome = controller.render(&[], &ChartConfig::default()).unwrap();

    assert_eq!(outcome, RenderOutcome::Skipped);
    assert!(controller.surface().is_empty());
    assert!(controller.scales().is_none());
}

#[test]
fn test_scenario_zero_previous() {
    let controller = render(&[ChartRecord::new("Create", 0.0, 100.0)], &ChartConfig::default());
    let scene = controller.surface();

    let delta = text(scene, Layer::DeltaLabels, "Create");
    assert_eq!(delta.content, format!("+100%{}", Glyph::Up));
    assert_eq!(delta.fill, Palette::POSITIVE);

    for (_, shape) in scene.iter() {
        if let Shape::Rect(r) = shape {
            assert!(r.x.is_finite() && r.y.is_finite());
            assert!(r.width.is_finite() && r.height >= 0.0);
        }
    }
}

#[test]
fn test_equal_values_render_as_negative() {
    let controller = render(&[ChartRecord::new("Delete", 750.0, 750.0)], &ChartConfig::default());
    let scene = controller.surface();

    let delta = text(scene, Layer::DeltaLabels, "Delete");
    assert_eq!(delta.content, format!("0%{}", Glyph::Down));
    assert_eq!(delta.fill, Palette::NEGATIVE);
}

#[test]
fn test_one_bar_pair_per_record_and_consistent_ticks() {
    let data = vec![
        ChartRecord::new("Open", 120_000.0, 180_000.0),
        ChartRecord::new("Close", 950_000.0, 410_000.0),
        ChartRecord::new("Delete", 33_000.0, 12_000.0),
        ChartRecord::new("View", 640_000.0, 702_500.0),
    ];
    let controller = render(&data, &ChartConfig::default());
    let scene = controller.surface();

    assert_eq!(scene.layer(Layer::Bars.prefix()).count(), data.len() * 2);
    assert_eq!(scene.layer(Layer::ValueLabels.prefix()).count(), data.len());
    assert_eq!(scene.layer(Layer::DeltaLabels.prefix()).count(), data.len());
    assert_eq!(scene.layer(Layer::CategoryAxis.prefix()).count(), data.len());

    let scales = controller.scales().unwrap();
    assert_eq!(scales.value.domain(), (0.0, 1_000_000.0));

    let tick_labels: Vec<&str> = scene
        .layer(Layer::ValueAxis.prefix())
        .filter(|(id, _)| id.in_layer("axis/value/tick/"))
        .filter_map(|(_, shape)| shape.as_text().map(|t| t.content.as_str()))
        .collect();
    assert_eq!(tick_labels.first(), Some(&"0"));
    assert_eq!(tick_labels.last(), Some(&"1000"));
    assert_eq!(tick_labels.len(), 11);

    // every bar stands on the common baseline
    let baseline = scales.value.map(0.0);
    for (_, shape) in scene.layer(Layer::Bars.prefix()) {
        let r = shape.as_rect().unwrap();
        assert_eq!(r.y + r.height, baseline);
    }
}

#[test]
fn test_render_is_idempotent() {
    let data = vec![
        ChartRecord::new("Open", 100.0, 150.0),
        ChartRecord::new("Close", 1000.0, 500.0),
    ];
    let config = ChartConfig::default();
    let mut controller = ChartController::new(Scene::new());

    controller.render(&data, &config).unwrap();
    let first = controller.surface().clone();
    controller.render(&data, &config).unwrap();

    assert_eq!(controller.surface(), &first);
}

#[test]
fn test_mode_switch_changes_only_value_mapping() {
    let data = vec![
        ChartRecord::new("Open", 1_200.0, 900_000.0),
        ChartRecord::new("Close", 40.0, 15_000.0),
    ];
    let linear = render(&data, &ChartConfig::default());
    let log = render(&data, &ChartConfig::default().with_mode(ScaleMode::Log));

    let (ls, gs) = (linear.scales().unwrap(), log.scales().unwrap());
    assert_eq!(ls.band0.domain(), gs.band0.domain());
    assert_eq!(ls.band1.domain(), gs.band1.domain());
    assert_ne!(ls.value.map(15_000.0), gs.value.map(15_000.0));

    let small_linear = rect(linear.surface(), "Close", SeriesKey::Current);
    let small_log = rect(log.surface(), "Close", SeriesKey::Current);
    assert_eq!(small_linear.x, small_log.x);
    assert!(small_log.height > small_linear.height);
}

#[test]
fn test_resize_rescales_geometry() {
    let data = vec![ChartRecord::new("Open", 100.0, 150.0)];
    let small = render(&data, &ChartConfig::default());
    let large = render(&data, &ChartConfig::new(1400.0, 1000.0, ScaleMode::Linear));

    let a = rect(small.surface(), "Open", SeriesKey::Current);
    let b = rect(large.surface(), "Open", SeriesKey::Current);
    assert!(b.width > a.width);
    assert!(b.height > a.height);
}

#[test]
fn test_incremental_redraw_matches_full_redraw() {
    let first = vec![
        ChartRecord::new("Open", 100.0, 150.0),
        ChartRecord::new("Close", 1000.0, 500.0),
    ];
    let second = vec![
        ChartRecord::new("Close", 1000.0, 1500.0),
        ChartRecord::new("View", 80.0, 60.0),
    ];

    let incremental = ChartConfig::default().with_redraw(RedrawPolicy::Incremental);
    let mut controller = ChartController::new(Scene::new());
    controller.render(&first, &incremental).unwrap();
    let outcome = controller.render(&second, &incremental).unwrap();

    let summary = outcome.summary().unwrap();
    assert_eq!(summary.bars.updated, 2);
    assert_eq!(summary.bars.entered, 2);
    assert_eq!(summary.bars.exited, 2);

    // same shapes in the same draw order, new ticks included
    let full = render(&second, &ChartConfig::default());
    assert_eq!(controller.surface().ids(), full.surface().ids());
    for id in full.surface().ids() {
        assert_eq!(controller.surface().get(&id), full.surface().get(&id), "shape {}", id);
    }
    assert_eq!(
        controller.surface().to_json().unwrap(),
        full.surface().to_json().unwrap()
    );
}

#[test]
fn test_duplicate_titles_collapse() {
    let data = vec![
        ChartRecord::new("Open", 100.0, 150.0),
        ChartRecord::new("Open", 200.0, 100.0),
    ];
    let controller = render(&data, &ChartConfig::default());
    let scene = controller.surface();

    assert_eq!(controller.scales().unwrap().band0.domain().len(), 1);
    assert_eq!(scene.layer(Layer::Bars.prefix()).count(), 2);
    // the later record wins the shared keys
    assert_eq!(
        text(scene, Layer::DeltaLabels, "Open").content,
        format!("-50%{}", Glyph::Down)
    );
}

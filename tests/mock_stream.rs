//! Mock source driving a controller, one render per published snapshot

use std::sync::{Arc, Mutex};

use deltachart::{
    ChartConfig, ChartController, ChartRecord, DataSource, Layer, MockActionSource,
    RenderOutcome, Scene, SourceSettings,
};

fn collect_snapshots(seed: u64) -> Vec<Vec<ChartRecord>> {
    let settings = SourceSettings {
        seed: Some(seed),
        ..SourceSettings::user_actions()
    };
    let mut source = MockActionSource::new(&settings);
    let snapshots = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&snapshots);

    source.subscribe(Box::new(move |records| {
        sink.lock().unwrap().push(records.to_vec());
    }));
    while source.poll() {}

    let collected = snapshots.lock().unwrap().clone();
    collected
}

#[test]
fn test_stream_renders_every_update() {
    let snapshots = collect_snapshots(2024);
    assert_eq!(snapshots.len(), 6);

    let mut controller = ChartController::new(Scene::new());
    let config = ChartConfig::default();

    let outcomes: Vec<RenderOutcome> = snapshots
        .iter()
        .map(|snapshot| controller.render(snapshot, &config).unwrap())
        .collect();

    assert_eq!(outcomes[0], RenderOutcome::Skipped);
    for (i, outcome) in outcomes.iter().enumerate().skip(1) {
        assert_eq!(outcome.summary().unwrap().categories, i);
    }

    let scene = controller.surface();
    assert_eq!(scene.layer(Layer::Bars.prefix()).count(), 10);
    assert_eq!(controller.records().len(), 5);
    println!("final scene holds {} shapes", scene.len());
}

#[test]
fn test_repeated_snapshot_renders_deterministically() {
    let snapshots = collect_snapshots(99);
    let last = snapshots.last().unwrap();

    let mut controller = ChartController::new(Scene::new());
    let config = ChartConfig::default();
    controller.render(last, &config).unwrap();
    let first = controller.surface().to_json().unwrap();
    controller.render(last, &config).unwrap();

    assert_eq!(controller.surface().to_json().unwrap(), first);
}

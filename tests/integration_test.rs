use nexus_lib::cli::{ArchiveDemo, Commands, ErrorsDemo};
use nexus_lib::config::{NexusConfig, NexusConfigBuilder};
use nexus_lib::error::NexusError;
use nexus_lib::game::{Inventory, Position};
use nexus_lib::garden::water_plants;
use nexus_lib::pipeline::stages::FnStage;
use nexus_lib::pipeline::{Adapter, AdapterKind, NexusManager, Pipeline, ProcessingStage};
use nexus_lib::run_command;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

fn add(n: i64) -> FnStage {
    FnStage::new(format!("add {}", n), move |v: Value| {
        Ok(json!(v.as_i64().unwrap_or(0) + n))
    })
}

fn times(n: i64) -> FnStage {
    FnStage::new(format!("times {}", n), move |v: Value| {
        Ok(json!(v.as_i64().unwrap_or(0) * n))
    })
}

/// An empty pipeline hands back exactly what it was given
#[test]
fn test_empty_pipeline_is_identity() {
    let pipeline = Pipeline::new("empty");
    for input in [json!(null), json!(42), json!("text"), json!({"nested": [1, 2, {"k": "v"}]})] {
        assert_eq!(pipeline.process(input.clone()).unwrap(), input);
    }
}

/// Processing equals applying each stage left to right
#[test]
fn test_pipeline_is_left_to_right_composition() {
    let pipeline = Pipeline::builder("arith")
        .add_stage(add(3))
        .add_stage(times(2))
        .add_stage(add(-1))
        .build();

    for x in [-5i64, 0, 7, 100] {
        let by_hand = add(-1)
            .process(times(2).process(add(3).process(json!(x)).unwrap()).unwrap())
            .unwrap();
        assert_eq!(pipeline.process(json!(x)).unwrap(), by_hand);
        assert_eq!(pipeline.process(json!(x)).unwrap(), json!((x + 3) * 2 - 1));
    }

    let run = pipeline.execute(json!(1)).unwrap();
    assert_eq!(run.stage_names(), vec!["add 3", "times 2", "add -1"]);
}

/// Processed count is the sum of successful batch sizes
#[test]
fn test_adapter_processed_count_sums_batch_sizes() {
    let mut stream = Adapter::new(AdapterKind::Stream, "stream_pipeline");
    let batches = [vec![21.0, 22.0], vec![20.5], vec![19.0, 23.5, 24.0, 22.2]];
    for batch in &batches {
        stream.process(json!(batch)).unwrap();
    }
    assert!(stream.process(json!("not a batch")).is_err());
    assert_eq!(stream.processed_count(), 2 + 1 + 4);

    let mut csv = Adapter::new(AdapterKind::Csv, "csv_pipeline");
    csv.process(json!("user,action\nalice,login\nbob,logout")).unwrap();
    csv.process(json!("user,action,timestamp")).unwrap();
    assert_eq!(csv.processed_count(), 4);
}

/// Unknown tags fail the same way every time and register nothing
#[test]
fn test_manager_rejects_unknown_tag_without_registering() {
    let mut manager = NexusManager::default();
    manager.create("json", "json_pipeline").unwrap();

    for tag in ["xml", "yaml", "", "JSON"] {
        let err = manager.create(tag, "bogus").err().unwrap();
        assert!(matches!(err, NexusError::UnknownPipelineType(ref t) if t == tag));
        assert_eq!(manager.adapter_count(), 1);
        assert!(manager.adapter(tag).is_none());
    }
}

#[test]
fn test_coordinate_distance() {
    let position: Position = "3,4,0".parse().unwrap();
    assert_eq!(format!("{:.2}", position.distance_from_origin()), "5.00");
}

#[test]
fn test_starter_inventory_extremes() {
    let inventory = Inventory::starter();
    assert_eq!(inventory.most_abundant(), Some(("potion", 5)));
    let (_, least) = inventory.least_abundant().unwrap();
    assert_eq!(least, 1);
}

/// "None" is rejected, cleanup still runs, and nothing propagates
#[test]
fn test_watering_reports_invalid_plant_and_cleans_up() {
    let config = NexusConfig::default();
    let mut out = Vec::new();

    let report = water_plants(&mut out, &["Tomato", "None", "Cactus"], &config.waterable_plants).unwrap();

    assert_eq!(report.watered, vec!["Tomato".to_string()]);
    assert!(report.error.is_some());
    assert!(report.cleanup_ran);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Error: Cannot water None - invalid plant!"));
    assert!(text.ends_with("Closing watering system (cleanup)\n"));
}

#[test]
fn test_run_command_default_pipeline() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    run_command(&Commands::Pipeline, &NexusConfig::default(), &mut out, &mut err).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Output: Processed temperature reading: 23.5°C (Normal range)"));
    assert!(text.ends_with("Nexus Integration complete. All systems operational.\n"));
    assert!(err.is_empty());
}

#[test]
fn test_run_command_watering_uses_configured_catalog() {
    let config = NexusConfigBuilder::new()
        .waterable_plants(["Cactus"])
        .build()
        .unwrap();
    let mut out = Vec::new();
    let mut err = Vec::new();
    run_command(
        &Commands::Errors {
            demo: ErrorsDemo::Watering,
        },
        &config,
        &mut out,
        &mut err,
    )
    .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Error: Cannot water Tomato - invalid plant!"));
    assert_eq!(text.matches("Closing watering system (cleanup)").count(), 2);
}

#[test]
fn test_archive_create_honours_configured_path() {
    let dir = TempDir::new().unwrap();
    let archive = dir.path().join("configured.txt");
    let config = NexusConfigBuilder::new().archive_path(&archive).build().unwrap();

    let mut out = Vec::new();
    let mut err = Vec::new();
    run_command(
        &Commands::Archive {
            demo: ArchiveDemo::Create { path: None },
        },
        &config,
        &mut out,
        &mut err,
    )
    .unwrap();

    let written = fs::read_to_string(&archive).unwrap();
    assert!(written.starts_with("[ENTRY 001] New quantum algorithm discovered\n"));
    assert!(written.ends_with("[ENTRY 003] Archived by Data Archivist trainee"));
}

#[test]
fn test_config_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nexus.json");
    fs::write(&path, r#"{"manager_capacity": 250, "event_seed": 7}"#).unwrap();

    let config = NexusConfig::load(&path).unwrap();
    assert_eq!(config.manager_capacity, 250);
    assert_eq!(config.event_seed, 7);
    assert_eq!(config.event_count, NexusConfig::default().event_count);
    assert_eq!(NexusManager::from_config(&config).capacity(), 250);
}

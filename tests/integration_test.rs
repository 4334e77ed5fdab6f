/// End-to-end integration tests for the indexer
///
/// These tests verify complete workflows: walking → parsing → grouping → summarizing → writing
mod common;

use climbs_indexer::config::IndexConfig;
use climbs_indexer::index_storage::load_index;
use climbs_indexer::indexer::{build_index, run_index};
use common::{DatasetDirBuilder, dataset_name, index_path, realistic_dataset_dir};

const BASE: &str = "https://example.org/raw/main";

fn config(root: &std::path::Path) -> IndexConfig {
    IndexConfig::new(root).with_repository("owner/climbs").with_base_url(BASE)
}

#[test]
fn test_e2e_single_file_region() {
    let root = DatasetDirBuilder::new().with_region("europe/luxembourg", "Luxembourg").build();

    let report = build_index(&config(root.path())).unwrap();
    let document = report.document;

    assert_eq!(document.regions.len(), 1);
    let entry = &document.regions["europe/luxembourg"];
    assert_eq!(entry.region_name, "Luxembourg");
    assert_eq!(entry.files, vec!["Luxembourg_climbs_all_basic_2025-11-01_v2.0.0_e0000.xlsx"]);
    assert_eq!(entry.file_count, 1);
    assert!(!entry.has_split_files);
    assert_eq!(
        entry.download_urls,
        vec![format!("{}/europe/luxembourg/{}", BASE, dataset_name("Luxembourg", None))]
    );
}

#[test]
fn test_e2e_split_region_ordered() {
    let root = DatasetDirBuilder::new().with_split_region("europe/belgium", "Belgium", 3).build();

    let document = build_index(&config(root.path())).unwrap().document;
    let entry = &document.regions["europe/belgium"];

    assert_eq!(
        entry.files,
        vec![
            dataset_name("Belgium", Some(1)),
            dataset_name("Belgium", Some(2)),
            dataset_name("Belgium", Some(3)),
        ]
    );
    assert_eq!(entry.file_count, 3);
    assert!(entry.has_split_files);
    assert_eq!(document.summary.regions_with_split_files, 1);
}

#[test]
fn test_e2e_split_order_is_numeric_not_lexical() {
    let root =
        DatasetDirBuilder::new().with_split_region("europe/france", "France", 11).build();

    let document = build_index(&config(root.path())).unwrap().document;
    let entry = &document.regions["europe/france"];

    let expected: Vec<String> = (1..=11).map(|i| dataset_name("France", Some(i))).collect();
    assert_eq!(entry.files, expected);
    for (file, url) in entry.files.iter().zip(&entry.download_urls) {
        assert!(url.ends_with(file.as_str()));
    }
}

#[test]
fn test_e2e_non_dataset_files_are_ignored() {
    let root = DatasetDirBuilder::new()
        .with_region("europe/malta", "Malta")
        .with_file("europe/malta/notes.txt", b"notes")
        .build();

    let report = build_index(&config(root.path())).unwrap();

    assert_eq!(report.document.summary.total_regions, 1);
    assert_eq!(report.document.summary.total_files, 1);
    assert!(report.skipped.is_empty(), "wrong-extension files are never candidates");
}

#[test]
fn test_e2e_unconventional_dataset_name_is_skipped() {
    let root = DatasetDirBuilder::new()
        .with_region("europe/malta", "Malta")
        .with_file("europe/malta/summary.xlsx", b"x")
        .with_file("Stray_climbs_all.xlsx", b"x")
        .build();

    let report = build_index(&config(root.path())).unwrap();

    assert_eq!(report.document.summary.total_files, 1);
    assert_eq!(report.skipped.len(), 2);
    let skipped: Vec<String> =
        report.skipped.iter().map(|s| s.path.to_string_lossy().replace('\\', "/")).collect();
    assert!(skipped.contains(&"europe/malta/summary.xlsx".to_string()));
    assert!(skipped.contains(&"Stray_climbs_all.xlsx".to_string()));
}

#[test]
fn test_e2e_same_region_name_in_different_directories() {
    let root = DatasetDirBuilder::new()
        .with_region("europe/alpha", "Alpha")
        .with_region("asia/alpha", "Alpha")
        .build();

    let document = build_index(&config(root.path())).unwrap().document;

    assert_eq!(document.regions.len(), 2);
    assert_eq!(document.summary.by_continent.get("europe"), Some(&1));
    assert_eq!(document.summary.by_continent.get("asia"), Some(&1));
}

#[test]
fn test_e2e_summary_invariants() {
    let root = realistic_dataset_dir();

    let document = build_index(&config(root.path())).unwrap().document;
    let summary = &document.summary;

    assert_eq!(summary.total_regions, document.regions.len());
    assert_eq!(summary.total_files, document.regions.values().map(|r| r.file_count).sum::<usize>());
    assert_eq!(summary.by_continent.values().sum::<usize>(), summary.total_regions);
    assert_eq!(summary.total_regions, 6);
    assert_eq!(summary.total_files, 9);
    assert_eq!(summary.regions_with_split_files, 2);
    assert_eq!(summary.by_continent.get("europe"), Some(&3));
    assert_eq!(summary.by_continent.get("north-america"), Some(&2));
    assert_eq!(summary.by_continent.get("oceania"), Some(&1));
    assert!(
        document.regions.contains_key("north-america/united-states-of-america/california")
    );
}

#[test]
fn test_e2e_keys_are_lowercased() {
    let root = DatasetDirBuilder::new().with_region("Europe/Luxembourg", "Luxembourg").build();

    let document = build_index(&config(root.path())).unwrap().document;

    assert!(document.regions.contains_key("europe/luxembourg"));
    assert_eq!(document.summary.by_continent.get("europe"), Some(&1));
}

#[test]
fn test_e2e_file_sizes_recorded() {
    let root = DatasetDirBuilder::new()
        .with_file(&format!("europe/malta/{}", dataset_name("Malta", Some(1))), &[0u8; 10])
        .with_file(&format!("europe/malta/{}", dataset_name("Malta", Some(2))), &[0u8; 5])
        .build();

    let document = build_index(&config(root.path())).unwrap().document;
    let entry = &document.regions["europe/malta"];

    assert_eq!(entry.file_sizes, vec![10, 5]);
    assert_eq!(entry.total_size, 15);
    assert_eq!(document.summary.total_size_bytes, 15);
}

#[test]
fn test_e2e_region_with_database() {
    let root = DatasetDirBuilder::new()
        .with_split_region("europe/belgium", "Belgium", 2)
        .with_file("europe/belgium/Belgium_climbs_2025-11-01_v2.0.0.sqlite", &[0u8; 7])
        .with_region("europe/malta", "Malta")
        .build();

    let document = build_index(&config(root.path())).unwrap().document;

    let belgium = &document.regions["europe/belgium"];
    assert_eq!(belgium.database_file.as_deref(), Some("Belgium_climbs_2025-11-01_v2.0.0.sqlite"));
    assert_eq!(belgium.database_size, Some(7));
    assert_eq!(
        belgium.database_url.as_deref(),
        Some("https://example.org/raw/main/europe/belgium/Belgium_climbs_2025-11-01_v2.0.0.sqlite")
    );
    assert_eq!(belgium.file_count, 2, "the database is not a dataset file");

    let malta = &document.regions["europe/malta"];
    assert_eq!(malta.database_file, None);

    assert_eq!(document.summary.total_sqlite_files, 1);
    assert_eq!(document.summary.total_sqlite_size_bytes, 7);
    assert_eq!(document.summary.total_files, 3);
}

#[test]
fn test_e2e_database_fields_omitted_when_absent() {
    let root = DatasetDirBuilder::new().with_region("europe/malta", "Malta").build();

    run_index(&config(root.path())).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(index_path(root.path())).unwrap()).unwrap();

    let malta = &json["regions"]["europe/malta"];
    assert!(malta.get("database_file").is_none());
    assert!(malta.get("database_size").is_none());
    assert!(malta.get("database_url").is_none());
    assert_eq!(json["summary"]["total_sqlite_files"], 0);
}

#[test]
fn test_e2e_single_region_round_trips_through_disk() {
    let root = DatasetDirBuilder::new().with_region("europe/malta", "Malta").build();

    let report = run_index(&config(root.path())).unwrap();
    let loaded = load_index(&index_path(root.path())).unwrap();

    assert_eq!(loaded.regions, report.document.regions);
    assert_eq!(loaded.regions["europe/malta"].region_key, "europe/malta");
}

#[test]
fn test_e2e_run_writes_index() {
    let root = realistic_dataset_dir();

    let report = run_index(&config(root.path())).unwrap();
    let loaded = load_index(&index_path(root.path())).unwrap();

    assert_eq!(loaded.regions, report.document.regions);
    assert_eq!(loaded.summary, report.document.summary);
    assert_eq!(loaded.source_identifier, "owner/climbs");
    assert_eq!(loaded.schema_version, "2.0.0");
}

#[test]
fn test_e2e_rerun_is_idempotent() {
    let root = realistic_dataset_dir();

    let first = run_index(&config(root.path())).unwrap().document;
    // The written index.json must not affect the second run
    let second = run_index(&config(root.path())).unwrap().document;

    assert_eq!(first.regions, second.regions);
    assert_eq!(first.summary, second.summary);
}

#[test]
fn test_e2e_empty_tree_produces_empty_index() {
    let root = DatasetDirBuilder::new().build();

    let report = run_index(&config(root.path())).unwrap();

    assert!(report.document.regions.is_empty());
    assert_eq!(report.document.summary.total_regions, 0);
    assert!(index_path(root.path()).exists());
}

#[test]
fn test_e2e_custom_output_path() {
    let root = DatasetDirBuilder::new().with_region("europe/malta", "Malta").build();
    let out_dir = tempfile::TempDir::new().unwrap();
    let output = out_dir.path().join("published.json");

    run_index(&config(root.path()).with_output(&output)).unwrap();

    assert!(output.exists());
    assert!(!index_path(root.path()).exists());
}

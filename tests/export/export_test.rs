//! Tests for CSV, Parquet and JSON export

use std::fs::{self, File};

use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use tempfile::tempdir;

use vat_panel::export::{
    CSV_FILE, ExportManifest, MANIFEST_FILE, PARQUET_FILE, write_csv, write_parquet,
};
use vat_panel::{GlobalAnalysis, export_panel, to_record_batch};

use crate::utils::{TEST_SEED, seeded_panel};

#[test]
fn test_record_batch_matches_panel() {
    let panel = seeded_panel();
    let batch = to_record_batch(panel.records()).unwrap();

    assert_eq!(batch.num_rows(), panel.len());
    let names: Vec<String> = batch
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    assert_eq!(names[..4], ["company", "sector", "country", "year"]);
    assert!(names.contains(&"total_tax_burden_ratio".to_string()));
}

#[test]
fn test_csv_has_header_and_one_line_per_record() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CSV_FILE);
    let panel = seeded_panel();

    let rows = write_csv(&path, panel.records()).unwrap();
    assert_eq!(rows, panel.len());

    let text = fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("company,sector,country,year,vat_paid"));
    assert_eq!(lines.count(), panel.len());
    assert!(text.contains("LVMH,Luxury,France,2022,2100"));
}

#[test]
fn test_parquet_round_trip_row_count() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(PARQUET_FILE);
    let panel = seeded_panel();

    write_parquet(&path, panel.records()).unwrap();

    let reader = ParquetRecordBatchReaderBuilder::try_new(File::open(&path).unwrap())
        .unwrap()
        .build()
        .unwrap();
    let rows: usize = reader.map(|batch| batch.unwrap().num_rows()).sum();
    assert_eq!(rows, panel.len());
}

#[test]
fn test_export_panel_writes_all_files() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("nested").join("output");
    let panel = seeded_panel();
    let analysis = GlobalAnalysis::from_panel(&panel).unwrap();

    let manifest = export_panel(&panel, &analysis, &out).unwrap();
    assert_eq!(manifest.rows, panel.len());
    assert_eq!(manifest.companies, 25);
    assert_eq!(manifest.random_seed, Some(TEST_SEED));

    assert_eq!(manifest.files.len(), 3);
    for name in manifest.files.iter().map(String::as_str).chain([MANIFEST_FILE]) {
        assert!(out.join(name).exists(), "missing {name}");
    }

    let written: ExportManifest =
        serde_json::from_str(&fs::read_to_string(out.join(MANIFEST_FILE)).unwrap()).unwrap();
    assert_eq!(written, manifest);
}

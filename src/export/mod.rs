//! Panel export
//!
//! Converts records to an Arrow `RecordBatch` through `serde_arrow` and
//! writes CSV, Parquet and JSON files plus a manifest describing the run.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use arrow::array::ArrayRef;
use arrow::compute::cast;
use arrow::datatypes::{DataType, Field, FieldRef, Schema};
use arrow::record_batch::RecordBatch;
use chrono::{DateTime, Utc};
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use serde::{Deserialize, Serialize};
use serde_arrow::schema::{SchemaLike, TracingOptions};

use crate::algorithm::Panel;
use crate::error::Result;
use crate::models::PanelRecord;
use crate::report::GlobalAnalysis;
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Panel dataset as CSV
pub const CSV_FILE: &str = "euronext_vat_data_2002_2025.csv";
/// Panel dataset as Parquet
pub const PARQUET_FILE: &str = "euronext_vat_data_2002_2025.parquet";
/// Global analysis as JSON
pub const ANALYSIS_FILE: &str = "global_analysis.json";
/// Run manifest
pub const MANIFEST_FILE: &str = "manifest.json";

/// Description of one export run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportManifest {
    /// Time the export finished
    pub generated_at: DateTime<Utc>,
    /// Base seed of the panel, if it was seeded
    pub random_seed: Option<u64>,
    /// Number of panel records written
    pub rows: usize,
    /// Number of distinct companies
    pub companies: usize,
    /// File names relative to the output directory
    pub files: Vec<String>,
}

/// Arrow fields traced from `PanelRecord`, sector and country as strings
pub fn record_fields() -> Result<Vec<FieldRef>> {
    let fields = Vec::<FieldRef>::from_type::<PanelRecord>(
        TracingOptions::default().enums_without_data_as_strings(true),
    )?;
    Ok(fields)
}

/// Convert panel records to a single record batch
///
/// Dictionary-encoded string columns are decoded to plain `Utf8`.
pub fn to_record_batch(records: &[PanelRecord]) -> Result<RecordBatch> {
    let fields = record_fields()?;
    let batch = serde_arrow::to_record_batch(&fields, &records)?;
    plain_strings(&batch)
}

fn plain_strings(batch: &RecordBatch) -> Result<RecordBatch> {
    let schema = batch.schema();
    let mut fields = Vec::with_capacity(schema.fields().len());
    let mut columns: Vec<ArrayRef> = Vec::with_capacity(batch.num_columns());

    for (field, column) in schema.fields().iter().zip(batch.columns()) {
        if matches!(field.data_type(), DataType::Dictionary(_, _)) {
            columns.push(cast(column, &DataType::Utf8)?);
            fields.push(Field::new(field.name(), DataType::Utf8, field.is_nullable()));
        } else {
            columns.push(Arc::clone(column));
            fields.push(field.as_ref().clone());
        }
    }

    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?)
}

/// Write records as CSV with a header row, returning the row count
pub fn write_csv(path: &Path, records: &[PanelRecord]) -> Result<usize> {
    let start = Instant::now();
    log_operation_start("Writing CSV to", path);

    let batch = to_record_batch(records)?;
    let file = BufWriter::new(File::create(path)?);
    let mut writer = arrow::csv::WriterBuilder::new().with_header(true).build(file);
    writer.write(&batch)?;
    writer.into_inner().flush()?;

    log_operation_complete("wrote", path, batch.num_rows(), Some(start.elapsed()));
    Ok(batch.num_rows())
}

/// Write records as Snappy-compressed Parquet, returning the row count
pub fn write_parquet(path: &Path, records: &[PanelRecord]) -> Result<usize> {
    let start = Instant::now();
    log_operation_start("Writing Parquet to", path);

    let batch = to_record_batch(records)?;
    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();
    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))?;
    writer.write(&batch)?;
    writer.close()?;

    log_operation_complete("wrote", path, batch.num_rows(), Some(start.elapsed()));
    Ok(batch.num_rows())
}

/// Write any serializable value as pretty-printed JSON
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut file, value)?;
    file.flush()?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

/// Write the panel, its global analysis and a manifest into `dir`
///
/// The directory is created if needed.
pub fn export_panel(panel: &Panel, analysis: &GlobalAnalysis, dir: &Path) -> Result<ExportManifest> {
    fs::create_dir_all(dir)?;

    let rows = write_csv(&dir.join(CSV_FILE), panel.records())?;
    write_parquet(&dir.join(PARQUET_FILE), panel.records())?;
    write_json(&dir.join(ANALYSIS_FILE), analysis)?;

    let manifest = ExportManifest {
        generated_at: Utc::now(),
        random_seed: panel.random_seed(),
        rows,
        companies: panel.companies().len(),
        files: [CSV_FILE, PARQUET_FILE, ANALYSIS_FILE]
            .iter()
            .map(ToString::to_string)
            .collect(),
    };
    write_json(&dir.join(MANIFEST_FILE), &manifest)?;

    Ok(manifest)
}

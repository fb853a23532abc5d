use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{
    Array, AsArray, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray,
};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{AttrValue, PurchaseDataset, Record};
use super::schema;
use crate::error::LoadError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the purchase dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – delimited file with a header row (the canonical source)
/// * `.json`    – `[{ "Gender": "...", "Purchase Amount (USD)": 49.99, ... }, ...]`
/// * `.parquet` – scalar columns (string / int / float)
///
/// Structural problems (missing file, absent required column, inconsistent
/// row width) fail the load; a Purchase Amount cell that does not parse as a
/// number becomes a missing value instead.
pub fn load_file(path: &Path) -> Result<PurchaseDataset, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => read_csv(std::fs::File::open(path)?)?,
        "json" => parse_json(&std::fs::read_to_string(path)?)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => return Err(LoadError::UnsupportedFormat(other.to_string())),
    };

    log::info!(
        "loaded {} purchase records ({} columns) from {}",
        dataset.len(),
        dataset.column_names.len(),
        path.display()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Parse CSV from any reader.  First row is the header; every required
/// column must be present and every row must match the header width.
pub fn read_csv<R: Read>(input: R) -> Result<PurchaseDataset, LoadError> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    for col in schema::REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(LoadError::MissingColumn {
                column: col.to_string(),
            });
        }
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let mut values = BTreeMap::new();
        for (col_idx, cell) in row.iter().enumerate() {
            values.insert(headers[col_idx].clone(), guess_value(cell));
        }
        records.push(finish_record(values));
    }

    Ok(PurchaseDataset::from_records(records))
}

/// Infer the cell type the way a dataframe would: integer, float, empty →
/// missing, anything else a string.
fn guess_value(s: &str) -> AttrValue {
    if s.is_empty() {
        return AttrValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return AttrValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return AttrValue::Float(f);
    }
    AttrValue::String(s.to_string())
}

/// Coerce the Purchase Amount column to numeric; cells without a numeric
/// reading become missing (never a load failure).
fn finish_record(mut values: BTreeMap<String, AttrValue>) -> Record {
    if let Some(v) = values.get_mut(schema::PURCHASE_AMOUNT) {
        *v = match v.as_f64() {
            Some(f) => AttrValue::Float(f),
            None => AttrValue::Null,
        };
    }
    Record::new(values)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON (the default `df.to_json(orient='records')`): a
/// top-level array of flat objects, one per purchase.
pub fn parse_json(text: &str) -> Result<PurchaseDataset, LoadError> {
    let root: JsonValue = serde_json::from_str(text)?;
    let rows = root
        .as_array()
        .ok_or_else(|| LoadError::Malformed("expected top-level JSON array".to_string()))?;

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .ok_or_else(|| LoadError::Malformed(format!("row {i} is not a JSON object")))?;

        for col in schema::REQUIRED_COLUMNS {
            if !obj.contains_key(col) {
                return Err(LoadError::MissingColumn {
                    column: col.to_string(),
                });
            }
        }

        let values: BTreeMap<String, AttrValue> = obj
            .iter()
            .map(|(key, val)| (key.clone(), json_to_attr(val)))
            .collect();
        records.push(finish_record(values));
    }

    Ok(PurchaseDataset::from_records(records))
}

fn json_to_attr(val: &JsonValue) -> AttrValue {
    match val {
        JsonValue::String(s) => AttrValue::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                AttrValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                AttrValue::Float(f)
            } else {
                AttrValue::String(n.to_string())
            }
        }
        JsonValue::Null => AttrValue::Null,
        other => AttrValue::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file of scalar columns.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<PurchaseDataset, LoadError> {
    let file = std::fs::File::open(path)?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;

    for col in schema::REQUIRED_COLUMNS {
        if builder.schema().index_of(col).is_err() {
            return Err(LoadError::MissingColumn {
                column: col.to_string(),
            });
        }
    }

    let reader = builder.build()?;
    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result?;
        let fields: Vec<String> = batch
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect();

        for row in 0..batch.num_rows() {
            let mut values = BTreeMap::new();
            for (col_idx, col_name) in fields.iter().enumerate() {
                values.insert(col_name.clone(), extract_value(batch.column(col_idx), row));
            }
            records.push(finish_record(values));
        }
    }

    Ok(PurchaseDataset::from_records(records))
}

/// Extract a single scalar value from an Arrow column at a given row.
fn extract_value(col: &Arc<dyn Array>, row: usize) -> AttrValue {
    if col.is_null(row) {
        return AttrValue::Null;
    }
    match col.data_type() {
        DataType::Utf8 | DataType::LargeUtf8 => {
            if let Some(s) = col.as_any().downcast_ref::<StringArray>() {
                AttrValue::String(s.value(row).to_string())
            } else {
                // LargeStringArray
                let s = col.as_string::<i64>();
                AttrValue::String(s.value(row).to_string())
            }
        }
        DataType::Int32 => {
            let arr = col.as_any().downcast_ref::<Int32Array>().unwrap();
            AttrValue::Integer(arr.value(row) as i64)
        }
        DataType::Int64 => {
            let arr = col.as_any().downcast_ref::<Int64Array>().unwrap();
            AttrValue::Integer(arr.value(row))
        }
        DataType::Float32 => {
            let arr = col.as_any().downcast_ref::<Float32Array>().unwrap();
            AttrValue::Float(arr.value(row) as f64)
        }
        DataType::Float64 => {
            let arr = col.as_any().downcast_ref::<Float64Array>().unwrap();
            AttrValue::Float(arr.value(row))
        }
        DataType::Boolean => {
            let arr = col.as_any().downcast_ref::<BooleanArray>().unwrap();
            AttrValue::String(arr.value(row).to_string())
        }
        _ => AttrValue::String(format!("{:?}", col.data_type())),
    }
}

//! Decoding record batches from the shapes the record source produces.
//!
//! A batch is either a bare array of records, a single API page, or an array
//! of pages fetched in order. Pages are flattened into one record list.

use serde_json::Value;

use crate::error::CoreError;
use crate::models::page::{Pagination, PatientPage};
use crate::models::patient::RawPatientRecord;

/// Records decoded from one input, plus the pagination of the last page when
/// the input was page-shaped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Batch {
    pub records: Vec<RawPatientRecord>,
    pub pagination: Option<Pagination>,
}

impl Batch {
    /// True when the input was paginated and the source reported more pages
    /// after the last one included here.
    pub fn is_partial(&self) -> bool {
        self.pagination.and_then(|p| p.next_page()).is_some()
    }
}

pub fn decode_batch(json: &str) -> Result<Batch, CoreError> {
    let value: Value = serde_json::from_str(json)?;
    decode_value(value)
}

pub fn decode_value(value: Value) -> Result<Batch, CoreError> {
    match value {
        Value::Array(items) if !items.is_empty() && items.iter().all(is_page) => {
            let mut batch = Batch::default();
            for item in items {
                let page: PatientPage = serde_json::from_value(item)?;
                batch.records.extend(page.data);
                batch.pagination = Some(page.pagination);
            }
            Ok(batch)
        }
        Value::Array(items) => {
            let records = items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<Result<Vec<RawPatientRecord>, _>>()?;
            Ok(Batch {
                records,
                pagination: None,
            })
        }
        value if is_page(&value) => {
            let page: PatientPage = serde_json::from_value(value)?;
            Ok(Batch {
                records: page.data,
                pagination: Some(page.pagination),
            })
        }
        other => Err(CoreError::UnrecognizedBatch(format!(
            "expected an array of records or a patient page, got {}",
            kind(&other)
        ))),
    }
}

fn is_page(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|o| o.contains_key("data") && o.contains_key("pagination"))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object without data/pagination",
    }
}

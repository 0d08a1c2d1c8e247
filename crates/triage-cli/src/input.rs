use std::io::Read;
use std::path::Path;

use eyre::{Result, WrapErr};
use tracing::{info, warn};
use triage_core::batch::{Batch, decode_batch};

/// Path value meaning "read from stdin".
pub const STDIN: &str = "-";

pub fn read_source(source: &str) -> Result<String> {
    if source == STDIN {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .wrap_err("failed to read records from stdin")?;
        return Ok(buf);
    }

    let path = Path::new(source);
    std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read records at {}: {e}", path.display()))
}

pub fn parse_batch(contents: &str, source: &str) -> Result<Batch> {
    let batch =
        decode_batch(contents).wrap_err_with(|| format!("failed to decode records from {source}"))?;

    info!(source, records = batch.records.len(), "loaded patient batch");
    if let Some(next) = batch.pagination.and_then(|p| p.next_page()) {
        warn!(
            source,
            next_page = next,
            "input ends before the last page; results cover a partial batch"
        );
    }
    Ok(batch)
}

pub fn load_batch(source: &str) -> Result<Batch> {
    let contents = read_source(source)?;
    parse_batch(&contents, source)
}

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use jobforge_core::{JobRecord, JOB_COLUMNS, LIST_DELIMITER};

use crate::errors::GenerationError;

/// Write the dataset as CSV, one row per record, columns per `JOB_COLUMNS`.
pub fn write_jobs_csv(path: &Path, records: &[JobRecord]) -> Result<u64, GenerationError> {
    let writer = BufWriter::new(File::create(path)?);
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    writer.write_record(JOB_COLUMNS)?;
    for record in records {
        writer.write_record(&encode_row(record)?)?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

/// Flatten one record into cell values. Multi-valued fields join on the
/// list delimiter; the staffing map becomes an embedded JSON object.
fn encode_row(record: &JobRecord) -> Result<Vec<String>, GenerationError> {
    let delimiter = LIST_DELIMITER.to_string();
    Ok(vec![
        record.id.clone(),
        record.project_name.clone(),
        record.domain.clone(),
        record.location.clone(),
        record.start_date.to_string(),
        record.end_date.to_string(),
        record.duration_months.to_string(),
        record.budget.to_string(),
        record.technologies.join(&delimiter),
        serde_json::to_string(&record.staffing_requirements)?,
        record.min_experience.to_string(),
        record.priority.clone(),
        record.similar_projects.join(&delimiter),
        record.remote_possible.to_string(),
    ])
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

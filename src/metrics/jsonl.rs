//! Line-delimited JSON metrics writer

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::{MetricsWriter, ScalarRecord};
use crate::error::{Error, Result};

/// Event file name inside the metrics directory
pub const SCALARS_FILE: &str = "scalars.jsonl";

/// Appends one [`ScalarRecord`] per line to `<dir>/scalars.jsonl`
pub struct JsonlScalarWriter {
    path: PathBuf,
    out: BufWriter<File>,
}

impl JsonlScalarWriter {
    /// Create the directory if needed and open the event file for appending
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .map_err(|e| Error::io(format!("creating metrics dir {}", dir.display()), e))?;

        let path = dir.join(SCALARS_FILE);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| Error::io(format!("opening {}", path.display()), e))?;

        Ok(Self { path, out: BufWriter::new(file) })
    }

    /// Path of the event file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record back from an event file
    pub fn read_all<P: AsRef<Path>>(path: P) -> Result<Vec<ScalarRecord>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("reading {}", path.display()), e))?;
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| Ok(serde_json::from_str(line)?))
            .collect()
    }
}

impl MetricsWriter for JsonlScalarWriter {
    fn add_scalar(&mut self, tag: &str, value: f64, step: u64) -> Result<()> {
        let line = serde_json::to_string(&ScalarRecord::now(tag, value, step))?;
        writeln!(self.out, "{line}")
            .map_err(|e| Error::io(format!("writing {}", self.path.display()), e))
    }

    fn flush(&mut self) -> Result<()> {
        self.out
            .flush()
            .map_err(|e| Error::io(format!("flushing {}", self.path.display()), e))
    }
}

impl Drop for JsonlScalarWriter {
    fn drop(&mut self) {
        let _ = self.out.flush();
    }
}

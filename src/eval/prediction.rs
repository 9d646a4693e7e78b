//! Prediction files
//!
//! Predictions for a stage are written to
//! `<dest_dir>/<stem(source)>.batch_<step>.pred.jsonl`, one JSON object per
//! line, and read back by the evaluator.

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// File name of `path` without its last extension
pub fn basename(path: &Path) -> String {
    path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
}

/// Prediction file path for `source` evaluated at `step`
pub fn prediction_path(dest_dir: &Path, source: &Path, step: u64) -> PathBuf {
    dest_dir.join(format!("{}.batch_{step}.pred.jsonl", basename(source)))
}

/// Writes one serialized record per line
pub struct PredictionWriter {
    path: PathBuf,
    out: BufWriter<File>,
    written: usize,
}

impl PredictionWriter {
    /// Create (or truncate) the prediction file
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)
            .map_err(|e| Error::io(format!("creating {}", path.display()), e))?;
        Ok(Self { path, out: BufWriter::new(file), written: 0 })
    }

    /// Append one record
    pub fn write<T: Serialize>(&mut self, record: &T) -> Result<()> {
        let line = serde_json::to_string(record)?;
        writeln!(self.out, "{line}")
            .map_err(|e| Error::io(format!("writing {}", self.path.display()), e))?;
        self.written += 1;
        Ok(())
    }

    /// Flush and return the number of records written
    pub fn finish(mut self) -> Result<usize> {
        self.out
            .flush()
            .map_err(|e| Error::io(format!("flushing {}", self.path.display()), e))?;
        Ok(self.written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_path_layout() {
        let path = prediction_path(
            Path::new("/runs/kp-20240101-000000"),
            Path::new("/data/kp20k_validation.json"),
            5000,
        );
        assert_eq!(
            path,
            PathBuf::from("/runs/kp-20240101-000000/kp20k_validation.batch_5000.pred.jsonl")
        );
    }

    #[test]
    fn test_basename_strips_last_extension_only() {
        assert_eq!(basename(Path::new("a/b/valid.tok.jsonl")), "valid.tok");
        assert_eq!(basename(Path::new("valid")), "valid");
    }

    #[test]
    fn test_writer_emits_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p.jsonl");

        let mut w = PredictionWriter::create(&path).unwrap();
        w.write(&serde_json::json!({"pred_keyphrases": [["deep", "learning"]]})).unwrap();
        w.write(&serde_json::json!({"pred_keyphrases": []})).unwrap();
        assert_eq!(w.finish().unwrap(), 2);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["pred_keyphrases"][0][1], "learning");
    }
}

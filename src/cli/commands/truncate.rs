//! `kptrain truncate`

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::cli::TruncateArgs;
use crate::error::{Error, Result};

/// Copy the first `count` JSON lines of `input` to `output`
///
/// Every kept line must parse as JSON. `input` and `output` may be the same
/// file. Returns the number of records written.
pub fn truncate_jsonl(input: &Path, output: &Path, count: usize) -> Result<usize> {
    let file =
        File::open(input).map_err(|e| Error::io(format!("opening {}", input.display()), e))?;

    let mut kept = String::new();
    let mut written = 0;
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        if written == count {
            break;
        }
        let line = line.map_err(|e| Error::io(format!("reading {}", input.display()), e))?;
        if line.trim().is_empty() {
            continue;
        }
        serde_json::from_str::<serde_json::Value>(&line).map_err(|e| {
            Error::Serialization(format!("{} line {}: {e}", input.display(), idx + 1))
        })?;
        kept.push_str(&line);
        kept.push('\n');
        written += 1;
    }

    fs::write(output, kept).map_err(|e| Error::io(format!("writing {}", output.display()), e))?;
    Ok(written)
}

pub fn run_truncate(args: &TruncateArgs) -> Result<()> {
    let output = args.output.as_deref().unwrap_or(&args.input);
    let written = truncate_jsonl(&args.input, output, args.count)?;
    info!("kept {written} records of {}", args.input.display());
    println!("Wrote {written} records to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(dir: &Path, n: usize) -> std::path::PathBuf {
        let path = dir.join("train.jsonl");
        let body: String =
            (0..n).map(|i| format!("{{\"id\": {i}, \"keyphrases\": [[\"k{i}\"]]}}\n")).collect();
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_truncate_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dataset(dir.path(), 10);

        let args = TruncateArgs { input: path.clone(), count: 3, output: None };
        run_truncate(&args).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3);
        assert!(content.lines().last().unwrap().contains("\"id\": 2"));
    }

    #[test]
    fn test_truncate_to_other_file_keeps_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dataset(dir.path(), 5);
        let out = dir.path().join("small.jsonl");

        assert_eq!(truncate_jsonl(&path, &out, 2).unwrap(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 5);
        assert_eq!(fs::read_to_string(&out).unwrap().lines().count(), 2);
    }

    #[test]
    fn test_count_larger_than_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dataset(dir.path(), 2);
        let out = dir.path().join("out.jsonl");
        assert_eq!(truncate_jsonl(&path, &out, 100).unwrap(), 2);
    }

    #[test]
    fn test_invalid_json_line_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.jsonl");
        fs::write(&path, "{\"ok\": 1}\nnot json\n").unwrap();

        let err = truncate_jsonl(&path, &dir.path().join("o.jsonl"), 5).unwrap_err();
        assert!(matches!(err, Error::Serialization(ref m) if m.contains("line 2")));
    }
}

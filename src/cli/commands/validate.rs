//! `kptrain validate`

use tracing::info;

use crate::cli::ValidateArgs;
use crate::config::{load_config, validate_paths, TrainerConfig};
use crate::error::Result;

/// Multi-line summary of the settings that shape a run
pub fn format_summary(config: &TrainerConfig) -> String {
    let exp = &config.experiment;
    let data = &config.data;
    let opt = &config.optimizer;
    let t = &config.training;

    let mut lines = vec![
        format!("  Experiment: {}", exp.name),
        format!("  Output base: {}", exp.dest_base_dir.display()),
        format!("  Train data: {}", data.train.display()),
        format!("  Valid data: {}", data.valid.display()),
    ];
    if let Some(test) = &data.test {
        lines.push(format!("  Test data: {}", test.display()));
    }
    lines.push(format!("  Vocabulary: {} ({} entries)", data.vocab_path.display(), data.vocab_size));
    lines.push(format!("  Batch size: {}", data.batch_size));
    lines.push(format!(
        "  Learning rate: {} (x{} every {} steps)",
        opt.learning_rate, opt.schedule_gamma, opt.schedule_step
    ));
    lines.push(format!("  Epochs: {}", t.epochs));
    lines.push(format!(
        "  Evaluate every {} steps, stop after {} without improvement",
        t.save_model_step, t.early_stop_tolerance
    ));
    lines.push(format!("  Top-N: {:?}", t.eval_topn));
    if let Some(from) = &t.train_from {
        match t.step {
            Some(step) => lines.push(format!("  Resume: {} at step {step}", from.display())),
            None => lines.push(format!("  Resume: {}", from.display())),
        }
    }
    lines.join("\n")
}

pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    info!("validating {}", args.config.display());

    let config = load_config(&args.config)?;
    if args.check_paths {
        validate_paths(&config)?;
    }

    println!("Configuration is valid");
    if args.detailed {
        println!();
        println!("{}", format_summary(&config));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::save_config;
    use crate::error::Error;

    #[test]
    fn test_summary_mentions_resume() {
        let config = TrainerConfig::default()
            .with_name("copyrnn")
            .with_resume("runs/a/copyrnn_epoch_1_batch_500.model", Some(500));
        let summary = format_summary(&config);
        assert!(summary.contains("Experiment: copyrnn"));
        assert!(summary.contains("at step 500"));
        assert!(summary.contains("Top-N: [5, 10]"));
    }

    #[test]
    fn test_validate_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.yaml");
        save_config(&TrainerConfig::default(), &path).unwrap();

        let args = ValidateArgs { config: path, detailed: true, check_paths: false };
        assert!(run_validate(&args).is_ok());
    }

    #[test]
    fn test_check_paths_reports_missing_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.yaml");
        let mut config = TrainerConfig::default();
        config.data.train = dir.path().join("missing.jsonl");
        save_config(&config, &path).unwrap();

        let args = ValidateArgs { config: path, detailed: false, check_paths: true };
        assert!(matches!(run_validate(&args), Err(Error::Validation(_))));
    }
}

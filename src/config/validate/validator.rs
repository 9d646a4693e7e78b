//! Configuration validation logic

use super::error::ValidationError;
use crate::config::schema::TrainerConfig;

/// Validate a trainer configuration
///
/// Checks numeric ranges and required names. Paths are not touched here;
/// see [`validate_paths`] for that.
pub fn validate_config(config: &TrainerConfig) -> Result<(), ValidationError> {
    if config.experiment.name.trim().is_empty() {
        return Err(ValidationError::EmptyExperimentName);
    }

    if config.data.batch_size == 0 {
        return Err(ValidationError::InvalidBatchSize(config.data.batch_size));
    }

    if config.data.vocab_size == 0 {
        return Err(ValidationError::InvalidVocabSize(config.data.vocab_size));
    }

    let lr = config.optimizer.learning_rate;
    if lr.is_nan() || lr <= 0.0 || lr > 1.0 {
        return Err(ValidationError::InvalidLearningRate(lr));
    }

    let gamma = config.optimizer.schedule_gamma;
    if gamma.is_nan() || gamma <= 0.0 {
        return Err(ValidationError::InvalidScheduleGamma(gamma));
    }

    if config.training.epochs == 0 {
        return Err(ValidationError::InvalidEpochs(config.training.epochs));
    }

    if config.training.save_model_step == 0 {
        return Err(ValidationError::InvalidSaveInterval(config.training.save_model_step));
    }

    if config.training.early_stop_tolerance == 0 {
        return Err(ValidationError::InvalidEarlyStopTolerance(
            config.training.early_stop_tolerance,
        ));
    }

    if config.training.eval_topn.is_empty() {
        return Err(ValidationError::EmptyEvalTopN);
    }
    if let Some(&n) = config.training.eval_topn.iter().find(|&&n| n == 0) {
        return Err(ValidationError::InvalidEvalTopN(n));
    }

    Ok(())
}

/// Check that every configured input path exists
pub fn validate_paths(config: &TrainerConfig) -> Result<(), ValidationError> {
    if !config.data.train.exists() {
        return Err(ValidationError::TrainDataNotFound(
            config.data.train.display().to_string(),
        ));
    }

    if !config.data.valid.exists() {
        return Err(ValidationError::ValidDataNotFound(
            config.data.valid.display().to_string(),
        ));
    }

    if let Some(test) = &config.data.test {
        if !test.exists() {
            return Err(ValidationError::TestDataNotFound(test.display().to_string()));
        }
    }

    if let Some(resume) = &config.training.train_from {
        if !resume.exists() {
            return Err(ValidationError::ResumeCheckpointNotFound(
                resume.display().to_string(),
            ));
        }
    }

    Ok(())
}

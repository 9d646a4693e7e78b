//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::schema::*;
use proptest::prelude::*;

fn arb_valid_config() -> impl Strategy<Value = TrainerConfig> {
    (
        1usize..512,      // batch_size
        1e-6f64..1.0,     // learning_rate
        1usize..100,      // epochs
        1u64..10_000,     // save_model_step
        1usize..20,       // early_stop_tolerance
        proptest::collection::vec(1usize..50, 1..4),
    )
        .prop_map(|(batch_size, lr, epochs, save, tolerance, topn)| {
            let mut config = TrainerConfig::default()
                .with_name("prop")
                .with_epochs(epochs)
                .with_save_model_step(save)
                .with_early_stop_tolerance(tolerance);
            config.data.batch_size = batch_size;
            config.optimizer.learning_rate = lr;
            config.training.eval_topn = topn;
            config
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_config_passes(config in arb_valid_config()) {
        prop_assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn prop_zero_save_cadence_fails(config in arb_valid_config()) {
        let config = config.with_save_model_step(0);
        prop_assert!(matches!(
            validate_config(&config),
            Err(ValidationError::InvalidSaveInterval(0))
        ));
    }

    #[test]
    fn prop_lr_above_one_fails(config in arb_valid_config(), lr in 1.0001f64..100.0) {
        let mut config = config;
        config.optimizer.learning_rate = lr;
        prop_assert!(matches!(
            validate_config(&config),
            Err(ValidationError::InvalidLearningRate(_))
        ));
    }
}

//! Optimizer trait
//!
//! Gradient computation and the parameter update itself belong to the model
//! backend. The harness only needs to read and adjust the learning rate.

/// Learning-rate handle onto an external optimizer
pub trait Optimizer {
    /// Get learning rate
    fn lr(&self) -> f64;

    /// Set learning rate
    fn set_lr(&mut self, lr: f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestOptimizer {
        learning_rate: f64,
    }

    impl Optimizer for TestOptimizer {
        fn lr(&self) -> f64 {
            self.learning_rate
        }

        fn set_lr(&mut self, lr: f64) {
            self.learning_rate = lr;
        }
    }

    #[test]
    fn test_set_lr() {
        let mut opt = TestOptimizer { learning_rate: 0.001 };
        opt.set_lr(0.01);
        assert_eq!(opt.lr(), 0.01);
    }
}

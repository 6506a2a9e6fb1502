use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers,
/// containers).
///
/// A module's parameters are handles to the trainable leaf nodes it owns;
/// the engine itself has no notion of "parameter", so enumerating which
/// nodes need a gradient reset before each training step is this trait's
/// job.
pub trait Module {
    /// Flat list of handles to the module's trainable leaf values, including
    /// those of sub-modules.
    fn parameters(&self) -> Vec<Value>;

    /// Resets the gradient accumulator of every parameter.
    ///
    /// Must be called between backward passes: gradients always accumulate,
    /// never overwrite.
    fn zero_grad(&self) {
        for parameter in self.parameters() {
            parameter.zero_grad();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PairModule {
        a: Value,
        b: Value,
    }

    impl Module for PairModule {
        fn parameters(&self) -> Vec<Value> {
            vec![self.a.clone(), self.b.clone()]
        }
    }

    #[test]
    fn test_zero_grad_resets_all_parameters() {
        let module = PairModule {
            a: Value::new(1.0),
            b: Value::new(2.0),
        };
        let loss = &module.a * &module.b;
        loss.backward();
        assert_ne!(module.a.grad(), 0.0);
        assert_ne!(module.b.grad(), 0.0);

        module.zero_grad();
        assert_eq!(module.a.grad(), 0.0);
        assert_eq!(module.b.grad(), 0.0);
    }
}

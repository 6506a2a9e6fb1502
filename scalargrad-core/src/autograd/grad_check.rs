use crate::error::ScalarGradError;
use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical:?} != numerical grad {numerical:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNotFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNotFinite { input_index: usize, value: f64 },

    #[error("Gradient check input must be a leaf node (input index {input_index})")]
    InputNotLeaf { input_index: usize },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences: `(f(x + h) - f(x - h)) / (2h)`.
///
/// `func` must rebuild the expression from the given leaf inputs on every
/// call; the checker perturbs each input's scalar in place, re-evaluates,
/// and restores it. `tolerance` is applied both absolutely and relatively
/// via `approx`.
pub fn check_grad<F>(
    func: F,
    inputs: &[Value],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    for (input_index, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index });
        }
    }

    // --- Analytical gradients ---
    for input in inputs {
        input.zero_grad();
    }
    let output = func(inputs).map_err(GradCheckError::ForwardPassError)?;
    output.backward();
    let analytical: Vec<f64> = inputs.iter().map(Value::grad).collect();

    // --- Numerical gradients, one perturbed input at a time ---
    for (input_index, input) in inputs.iter().enumerate() {
        let original = input.data();

        input.set_data(original + epsilon);
        let loss_plus = func(inputs)
            .map_err(GradCheckError::ForwardPassError)?
            .data();

        input.set_data(original - epsilon);
        let loss_minus = func(inputs)
            .map_err(GradCheckError::ForwardPassError)?
            .data();

        input.set_data(original);

        let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNotFinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        let value = analytical[input_index];
        if !value.is_finite() {
            return Err(GradCheckError::AnalyticalGradNotFinite { input_index, value });
        }

        if !relative_eq!(
            value,
            numerical,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical: value,
                numerical,
                difference: (value - numerical).abs(),
            });
        }
    }

    Ok(())
}

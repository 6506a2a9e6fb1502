use crate::autograd::op::Op;
use crate::error::ScalarGradError;
use crate::value::Value;
use num_traits::ToPrimitive;

/// Raises a node to a raw scalar power.
///
/// The exponent is a constant, never a node; only the base participates in
/// the graph. Numeric edge cases follow IEEE-754: `0^-1` is infinite and a
/// negative base with a fractional exponent is NaN, neither raises.
pub fn pow_op(base: &Value, exponent: f64) -> Value {
    Value::from_op(base.data().powf(exponent), Op::Pow(base.clone(), exponent))
}

impl Value {
    /// See [`pow_op`].
    pub fn powf(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }

    /// Generic-exponent variant of [`Value::powf`].
    ///
    /// Fails with [`ScalarGradError::UnsupportedOperand`] when the exponent
    /// kind cannot be converted to the engine scalar.
    pub fn pow<E: ToPrimitive>(&self, exponent: E) -> Result<Value, ScalarGradError> {
        let exponent = exponent
            .to_f64()
            .ok_or_else(|| ScalarGradError::UnsupportedOperand {
                operation: "pow".to_string(),
                reason: format!(
                    "exponent of type {} is not convertible to the engine scalar",
                    std::any::type_name::<E>()
                ),
            })?;
        Ok(pow_op(self, exponent))
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;

use crate::autograd::op::Op;
use crate::value::Value;

/// Hyperbolic tangent, computed as `(e^{2x} - 1) / (e^{2x} + 1)`.
///
/// Backward rule: `1 - tanh(x)^2`, read from the output's forward value.
pub fn tanh_op(a: &Value) -> Value {
    let e2x = (2.0 * a.data()).exp();
    let out = (e2x - 1.0) / (e2x + 1.0);
    Value::from_op(out, Op::Tanh(a.clone()))
}

impl Value {
    /// See [`tanh_op`].
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;

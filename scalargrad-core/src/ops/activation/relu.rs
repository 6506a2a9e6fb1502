use crate::autograd::op::Op;
use crate::value::Value;

/// Rectified Linear Unit: `max(0, x)`.
///
/// The gradient flows only through the branch that was forward-active; an
/// exactly-zero input is treated as inactive (sub-gradient choice at the
/// boundary).
pub fn relu_op(a: &Value) -> Value {
    let x = a.data();
    let out = if x < 0.0 { 0.0 } else { x };
    Value::from_op(out, Op::Relu(a.clone()))
}

impl Value {
    /// See [`relu_op`].
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;

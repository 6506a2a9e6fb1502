use crate::autograd::op::Op;
use crate::value::Value;

/// Multiplies two nodes, recording both as predecessors of the result.
///
/// Backward rule: each operand receives the *other* operand's forward value
/// times the output gradient.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() * b.data(), Op::Mul(a.clone(), b.clone()))
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;

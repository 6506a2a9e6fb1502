use crate::autograd::op::Op;
use crate::value::Value;

/// Adds two nodes, recording both as predecessors of the result.
///
/// Backward rule: each operand receives the output gradient unchanged
/// (`d(a + b)/da = d(a + b)/db = 1`).
pub fn add_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() + b.data(), Op::Add(a.clone(), b.clone()))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;

use crate::autograd::op::Op;
use crate::value::Value;

/// Natural exponential.
///
/// Backward rule exploits `d/dx e^x = e^x`: the contribution is the output's
/// own forward value times the output gradient.
pub fn exp_op(a: &Value) -> Value {
    Value::from_op(a.data().exp(), Op::Exp(a.clone()))
}

impl Value {
    /// See [`exp_op`].
    pub fn exp(&self) -> Value {
        exp_op(self)
    }
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;

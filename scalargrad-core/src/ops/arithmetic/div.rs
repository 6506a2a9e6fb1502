use super::mul::mul_op;
use super::pow::pow_op;
use crate::value::Value;

/// Division, defined as `a * b^-1`.
///
/// Divide-by-zero inherits the IEEE-754 behavior of the power rule: an
/// infinite forward value rather than an error.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_op(b, -1.0))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;

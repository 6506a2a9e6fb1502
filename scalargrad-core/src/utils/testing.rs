use crate::value::Value;

/// Asserts a node's forward scalar is within `tolerance` of `expected`.
/// Panics with the actual/expected pair on mismatch (NaN always mismatches).
pub fn check_value_near(actual: &Value, expected: f64, tolerance: f64) {
    let data = actual.data();
    let diff = (data - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            data, expected, diff, tolerance
        );
    }
}

/// Same check for the gradient accumulator.
pub fn check_grad_near(actual: &Value, expected: f64, tolerance: f64) {
    let grad = actual.grad();
    let diff = (grad - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "Gradient mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            grad, expected, diff, tolerance
        );
    }
}

use crate::autograd::check_grad;
use crate::error::ScalarGradError;
use crate::ops::arithmetic::pow_op;
use crate::value::Value;
use approx::assert_relative_eq;

#[test]
fn test_pow_forward() {
    let a = Value::new(3.0);
    assert_eq!(pow_op(&a, 2.0).data(), 9.0);
    assert_relative_eq!(a.powf(0.5).data(), 3.0f64.sqrt());
}

#[test]
fn test_pow_backward() {
    // d(x^3)/dx = 3x^2
    let a = Value::new(2.0);
    let out = a.powf(3.0);
    out.backward();
    assert_eq!(a.grad(), 12.0);
}

#[test]
fn test_pow_zero_exponent_gradient() {
    // p = 0 away from x = 0: derivative is 0 * x^-1 = 0
    let a = Value::new(2.0);
    let out = a.powf(0.0);
    assert_eq!(out.data(), 1.0);
    out.backward();
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn test_pow_generic_exponent() {
    let a = Value::new(2.0);
    assert_eq!(a.pow(3i32).unwrap().data(), 8.0);
}

#[test]
fn test_pow_unconvertible_exponent() {
    struct NotANumber;
    impl num_traits::ToPrimitive for NotANumber {
        fn to_i64(&self) -> Option<i64> {
            None
        }
        fn to_u64(&self) -> Option<u64> {
            None
        }
    }
    let a = Value::new(2.0);
    assert!(matches!(
        a.pow(NotANumber),
        Err(ScalarGradError::UnsupportedOperand { .. })
    ));
}

#[test]
fn test_pow_ieee_edge_cases() {
    // Divide-by-zero shape: 0^-1 is infinite, not an error.
    let zero = Value::new(0.0);
    assert!(zero.powf(-1.0).data().is_infinite());

    // Negative base with fractional exponent is NaN, not an error.
    let negative = Value::new(-8.0);
    assert!(negative.powf(0.5).data().is_nan());
}

#[test]
fn test_pow_grad_check() {
    let a = Value::new(1.6);
    let func = |inputs: &[Value]| Ok(inputs[0].powf(2.5));
    let result = check_grad(func, &[a], 1e-5, 1e-4);
    assert!(result.is_ok(), "pow grad check failed: {:?}", result.err());
}

use crate::autograd::check_grad;
use crate::ops::arithmetic::div_op;
use crate::utils::testing::check_grad_near;
use crate::value::Value;

#[test]
fn test_div_forward() {
    let a = Value::new(7.0);
    let b = Value::new(2.0);
    assert_eq!(div_op(&a, &b).data(), 3.5);
}

#[test]
fn test_div_backward() {
    // d(a/b)/da = 1/b, d(a/b)/db = -a/b^2
    let a = Value::new(6.0);
    let b = Value::new(2.0);
    let out = &a / &b;
    out.backward();
    check_grad_near(&a, 0.5, 1e-12);
    check_grad_near(&b, -1.5, 1e-12);
}

#[test]
fn test_div_by_zero_is_infinite() {
    let a = Value::new(1.0);
    let b = Value::new(0.0);
    assert!(div_op(&a, &b).data().is_infinite());
}

#[test]
fn test_div_scalar_promotion() {
    let a = Value::new(3.0);
    assert_eq!((&a / 2.0).data(), 1.5);
    assert_eq!((6.0 / &a).data(), 2.0);
}

#[test]
fn test_div_grad_check() {
    let a = Value::new(2.3);
    let b = Value::new(-1.1);
    let func = |inputs: &[Value]| Ok(&inputs[0] / &inputs[1]);
    let result = check_grad(func, &[a, b], 1e-5, 1e-4);
    assert!(result.is_ok(), "div grad check failed: {:?}", result.err());
}

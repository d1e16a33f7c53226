use super::*;
use crate::autograd::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_pow_square() {
    let a = Value::new(5.0);
    let c = a.pow(2.0);
    assert_eq!(c.data(), 25.0);
    assert_eq!(c.op(), "**2");
    c.backward();
    assert_eq!(a.grad(), 10.0);
}

#[test]
fn test_pow_fractional_and_negative_exponents() {
    let a = Value::new(4.0);
    let root = a.pow(0.5);
    assert_relative_eq!(root.data(), 2.0);
    root.backward();
    assert_relative_eq!(a.grad(), 0.25);

    let b = Value::new(2.0);
    let inv = pow_op(&b, -1.0);
    assert_relative_eq!(inv.data(), 0.5);
    inv.backward();
    assert_relative_eq!(b.grad(), -0.25);
}

#[test]
fn test_pow_trait() {
    let a = Value::new(3.0);
    let c = Pow::pow(&a, 3.0);
    assert_relative_eq!(c.data(), 27.0);
}

#[test]
fn test_pow_grad_check() {
    check_grad(|x| x[0].pow(3.0) + x[1].pow(-2.0), &[1.1, 0.8], 1e-6, 1e-5)
        .expect("pow grad check");
}

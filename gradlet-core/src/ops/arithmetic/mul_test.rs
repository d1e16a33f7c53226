use super::*;
use crate::autograd::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_mul_forward_and_backward() {
    let a = Value::new(2.0);
    let b = Value::new(3.0);
    let c = mul_op(&a, &b);
    assert_eq!(c.data(), 6.0);
    assert_eq!(c.op(), "*");
    c.backward();
    assert_eq!(a.grad(), 3.0);
    assert_eq!(b.grad(), 2.0);
}

#[test]
fn test_mul_square_via_same_operand() {
    let a = Value::new(-4.0);
    let c = &a * &a;
    assert_eq!(c.data(), 16.0);
    c.backward();
    assert_eq!(a.grad(), -8.0);
}

#[test]
fn test_mul_by_constant() {
    let a = Value::new(1.5);
    let c = 4.0 * &a;
    assert_eq!(c.data(), 6.0);
    c.backward();
    assert_eq!(a.grad(), 4.0);
}

#[test]
fn test_mul_reads_operand_values_at_backward_time() {
    let a = Value::new(2.0);
    let b = Value::new(3.0);
    let c = &a * &b;
    b.set_data(10.0);
    c.backward();
    assert_eq!(a.grad(), 10.0);
}

#[test]
fn test_mul_grad_check() {
    check_grad(|x| &x[0] * &x[1] * &x[0], &[0.7, -2.2], 1e-6, 1e-6).expect("mul grad check");
    let product: Value = [Value::new(2.0), Value::new(3.0)]
        .iter()
        .fold(Value::new(1.0), |acc, v| acc * v);
    assert_relative_eq!(product.data(), 6.0);
}

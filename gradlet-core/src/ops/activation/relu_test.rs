use super::*;

#[test]
fn test_relu_negative_input_blocks_gradient() {
    let a = Value::new(-0.5);
    let c = relu_op(&a);
    assert_eq!(c.data(), 0.0);
    assert_eq!(c.op(), "ReLU");
    c.backward();
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn test_relu_positive_input_passes_gradient() {
    let a = Value::new(1.5);
    let c = a.relu();
    assert_eq!(c.data(), 1.5);
    c.backward();
    assert_eq!(a.grad(), 1.0);
}

#[test]
fn test_relu_at_zero() {
    let a = Value::new(0.0);
    let c = a.relu();
    assert_eq!(c.data(), 0.0);
    c.backward();
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn test_relu_scales_upstream_gradient() {
    let a = Value::new(2.0);
    let c = a.relu() * 3.0;
    c.backward();
    assert_eq!(a.grad(), 3.0);
}

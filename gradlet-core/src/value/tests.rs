use super::*;
use num_traits::{One, Zero};
use std::collections::HashSet;

#[test]
fn test_new_leaf() {
    let v = Value::new(3.5);
    assert_eq!(v.data(), 3.5);
    assert_eq!(v.grad(), 0.0);
    assert!(v.is_leaf());
    assert!(v.operands().is_empty());
    assert_eq!(v.op(), "");
    assert_eq!(v.label(), "");
}

#[test]
fn test_from_f64_and_defaults() {
    let v: Value = 2.0.into();
    assert_eq!(v.data(), 2.0);
    assert_eq!(Value::default().data(), 0.0);
    assert!(Value::zero().is_zero());
    assert_eq!(Value::one().data(), 1.0);
}

#[test]
fn test_clone_shares_node() {
    let a = Value::new(1.0);
    let b = a.clone();
    b.set_data(4.0);
    b.acc_grad(2.0);
    assert_eq!(a.data(), 4.0);
    assert_eq!(a.grad(), 2.0);
    assert_eq!(a, b);
    assert_eq!(a.node_id(), b.node_id());
}

#[test]
fn test_equality_is_identity() {
    let a = Value::new(1.0);
    let b = Value::new(1.0);
    assert_ne!(a, b);
    assert!(!Value::ptr_eq(&a, &b));

    let mut set = HashSet::new();
    set.insert(a.clone());
    set.insert(b.clone());
    set.insert(a.clone());
    assert_eq!(set.len(), 2);
}

#[test]
fn test_data_updates() {
    let w = Value::new(1.0);
    w.add_to_data(0.5);
    assert_eq!(w.data(), 1.5);
    w.sub_data(2.0);
    assert_eq!(w.data(), -0.5);
}

#[test]
fn test_operation_records_operands_in_order() {
    let a = Value::new(2.0).with_label("a");
    let b = Value::new(3.0).with_label("b");
    let c = &a * &b;
    assert!(!c.is_leaf());
    let operands = c.operands();
    assert_eq!(operands.len(), 2);
    assert_eq!(operands[0], a);
    assert_eq!(operands[1], b);
    assert_eq!(operands[0].label(), "a");
}

#[test]
fn test_debug_and_display() {
    let a = Value::new(2.0).with_label("a");
    let c = a.tanh();
    assert_eq!(format!("{}", Value::new(1.5)), "Value(data=1.5)");
    assert_eq!(format!("{:?}", a), "Value(data=2, grad=0, label=\"a\")");
    assert!(format!("{:?}", c).contains("op=\"tanh\""));
}

#[test]
fn test_sum_folds_through_graph() {
    let xs: Vec<Value> = [1.0, 2.0, 3.0].iter().copied().map(Value::new).collect();
    let total: Value = xs.iter().sum();
    assert_eq!(total.data(), 6.0);
    total.backward();
    for x in &xs {
        assert_eq!(x.grad(), 1.0);
    }

    let owned: Value = vec![Value::new(0.5), Value::new(0.25)].into_iter().sum();
    assert_eq!(owned.data(), 0.75);

    let empty: Value = Vec::<Value>::new().into_iter().sum();
    assert_eq!(empty.data(), 0.0);
}

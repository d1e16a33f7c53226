use super::*;
use crate::utils::testing::values;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_new_initialization() {
    let mut rng = StdRng::seed_from_u64(42);
    let n = Neuron::new(5, Activation::Relu, &mut rng);
    assert_eq!(n.nin(), 5);
    assert_eq!(n.num_parameters(), 6);
    assert!(n
        .weights()
        .iter()
        .all(|w| (-1.0..1.0).contains(&w.data()) && w.is_leaf()));
    assert_eq!(n.bias().data(), 0.0);
}

#[test]
fn test_forward_linear() {
    let n = Neuron::from_weights(&[2.0, -1.0], 0.5, Activation::Linear);
    let out = n.forward(&values(&[3.0, 4.0])).expect("forward");
    assert_relative_eq!(out.data(), 2.5);
    out.backward();
    assert_eq!(n.weights()[0].grad(), 3.0);
    assert_eq!(n.weights()[1].grad(), 4.0);
    assert_eq!(n.bias().grad(), 1.0);
}

#[test]
fn test_forward_relu_gates_negative_sum() {
    let n = Neuron::from_weights(&[1.0], -2.0, Activation::Relu);
    let x = values(&[1.0]);
    let out = n.forward(&x).expect("forward");
    assert_eq!(out.data(), 0.0);
    out.backward();
    assert_eq!(n.weights()[0].grad(), 0.0);
    assert_eq!(x[0].grad(), 0.0);
}

#[test]
fn test_forward_tanh() {
    let n = Neuron::from_weights(&[0.5], 0.0, Activation::Tanh);
    let out = n.forward(&values(&[1.0])).expect("forward");
    assert_relative_eq!(out.data(), 0.5f64.tanh());
}

#[test]
fn test_shape_mismatch() {
    let n = Neuron::from_weights(&[1.0, 1.0], 0.0, Activation::Linear);
    let err = n.forward(&values(&[1.0])).unwrap_err();
    assert_eq!(
        err,
        GradletError::ShapeMismatch {
            expected: 2,
            actual: 1,
            operation: "Neuron::forward".to_string(),
        }
    );
}

#[test]
fn test_zero_input_neuron_returns_bias() {
    let n = Neuron::from_weights(&[], 0.75, Activation::Linear);
    let out = n.forward(&[]).expect("forward");
    assert_eq!(out.data(), 0.75);
    assert_eq!(out, *n.bias().value());
}

#[test]
fn test_display_and_names() {
    let n = Neuron::from_weights(&[1.0, 2.0], 0.0, Activation::Relu);
    assert_eq!(n.to_string(), "ReLUNeuron(2)");
    let lin = Neuron::from_weights(&[1.0], 0.0, Activation::Linear);
    assert_eq!(lin.to_string(), "LinearNeuron(1)");
    let names: Vec<String> = n.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["weight.0", "weight.1", "bias"]);
}

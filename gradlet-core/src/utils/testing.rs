use crate::value::Value;

/// Checks that every node's forward value is within `tolerance` of the
/// expected one.
///
/// Panics with the first mismatching index.
pub fn check_values_near(actual: &[Value], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a.data() - e).abs();
        if diff > tolerance || diff.is_nan() {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                a.data(),
                e,
                diff,
                tolerance
            );
        }
    }
}

/// Same as [`check_values_near`] for gradients.
pub fn check_grads_near(actual: &[Value], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a.grad() - e).abs();
        if diff > tolerance || diff.is_nan() {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                a.grad(),
                e,
                diff,
                tolerance
            );
        }
    }
}

/// Builds leaves from raw numbers.
pub fn values(data: &[f64]) -> Vec<Value> {
    data.iter().copied().map(Value::new).collect()
}

use super::vec_dataset::VecDataset;
use gradlet_core::Value;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One labelled example: raw feature values and a scalar target.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub features: Vec<f64>,
    pub target: f64,
}

impl Sample {
    pub fn new(features: Vec<f64>, target: f64) -> Self {
        Sample { features, target }
    }

    /// Lifts the features to fresh leaves for a forward pass.
    pub fn input_values(&self) -> Vec<Value> {
        self.features.iter().copied().map(Value::new).collect()
    }
}

/// Generates `n` points uniformly in `[0, 1)²`, labelled `1.0` when
/// `x1 + x2 > threshold` and `-1.0` otherwise.
///
/// The same `seed` always produces the same dataset.
pub fn half_plane(n: usize, threshold: f64, seed: u64) -> VecDataset<Sample> {
    let mut rng = StdRng::seed_from_u64(seed);
    let samples: Vec<Sample> = (0..n)
        .map(|_| {
            let x1: f64 = rng.gen();
            let x2: f64 = rng.gen();
            let target = if x1 + x2 > threshold { 1.0 } else { -1.0 };
            Sample::new(vec![x1, x2], target)
        })
        .collect();
    debug!(
        "half_plane: {} samples, {} positive (threshold {}, seed {})",
        n,
        samples.iter().filter(|s| s.target > 0.0).count(),
        threshold,
        seed
    );
    VecDataset::new(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::Dataset;

    #[test]
    fn test_labels_follow_threshold() {
        let dataset = half_plane(200, 1.0, 42);
        assert_eq!(dataset.len(), 200);
        for sample in dataset.iter() {
            assert_eq!(sample.features.len(), 2);
            assert!(sample.features.iter().all(|x| (0.0..1.0).contains(x)));
            let expected = if sample.features[0] + sample.features[1] > 1.0 {
                1.0
            } else {
                -1.0
            };
            assert_eq!(sample.target, expected);
        }
    }

    #[test]
    fn test_seed_reproducibility() {
        assert_eq!(
            half_plane(20, 1.0, 7).as_slice(),
            half_plane(20, 1.0, 7).as_slice()
        );
        assert_ne!(
            half_plane(20, 1.0, 7).as_slice(),
            half_plane(20, 1.0, 8).as_slice()
        );
    }

    #[test]
    fn test_both_classes_present() {
        let dataset = half_plane(100, 1.0, 42);
        let positives = dataset.iter().filter(|s| s.target > 0.0).count();
        assert!(positives > 0 && positives < 100);
    }

    #[test]
    fn test_input_values_are_fresh_leaves() {
        let sample = Sample::new(vec![0.25, 0.5], 1.0);
        let a = sample.input_values();
        let b = sample.input_values();
        assert_eq!(a[1].data(), 0.5);
        assert!(a[0].is_leaf());
        assert_ne!(a[0], b[0]);
    }
}

// gradlet-data/src/samplers/random_sampler.rs

use super::traits::Sampler;
use log::warn;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicU64, Ordering};

/// A sampler that randomly samples indices from a dataset.
///
/// Without a seed every pass draws from the thread RNG. With a seed, pass
/// `k` is drawn from an RNG seeded with `seed + k`, so the sequence of passes
/// is reproducible while each pass still gets a new order.
#[derive(Debug)]
pub struct RandomSampler {
    replacement: bool,
    num_samples: Option<usize>,
    seed: Option<u64>,
    passes: AtomicU64,
}

impl RandomSampler {
    /// Creates a new `RandomSampler`.
    ///
    /// # Arguments
    ///
    /// * `replacement`: If `true`, an index can be selected multiple times.
    /// * `num_samples`: The total number of samples to draw. If `None`, it defaults to the dataset size.
    pub fn new(replacement: bool, num_samples: Option<usize>) -> Self {
        RandomSampler {
            replacement,
            num_samples,
            seed: None,
            passes: AtomicU64::new(0),
        }
    }

    /// Makes the sampler deterministic.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn draw<R: Rng>(&self, rng: &mut R, dataset_len: usize) -> Vec<usize> {
        let actual_num_samples = self.num_samples.unwrap_or(dataset_len);
        if self.replacement {
            (0..actual_num_samples)
                .map(|_| rng.gen_range(0..dataset_len))
                .collect()
        } else {
            let mut indices: Vec<usize> = (0..dataset_len).collect();
            indices.shuffle(rng);
            indices.truncate(actual_num_samples);
            indices
        }
    }
}

impl Sampler for RandomSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        if dataset_len == 0 {
            return Box::new(std::iter::empty());
        }
        let actual_num_samples = self.num_samples.unwrap_or(dataset_len);
        if !self.replacement && actual_num_samples > dataset_len {
            warn!(
                "RandomSampler: num_samples ({}) > dataset_len ({}) without replacement. Returning empty iterator.",
                actual_num_samples, dataset_len
            );
            return Box::new(std::iter::empty());
        }

        let indices = match self.seed {
            Some(seed) => {
                let pass = self.passes.fetch_add(1, Ordering::Relaxed);
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(pass));
                self.draw(&mut rng, dataset_len)
            }
            None => self.draw(&mut rand::thread_rng(), dataset_len),
        };
        Box::new(indices.into_iter())
    }

    fn len(&self, dataset_len: usize) -> usize {
        self.num_samples.unwrap_or(dataset_len)
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;

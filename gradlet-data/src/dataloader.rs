// dataloader.rs
//! # DataLoader
//!
//! Batches items of a [`Dataset`] in the order chosen by a [`Sampler`].
//!
//! ```rust
//! use gradlet_data::dataloader::DataLoader;
//! use gradlet_data::datasets::VecDataset;
//! use gradlet_data::samplers::SequentialSampler;
//!
//! let dataset = VecDataset::new(vec![1, 2, 3, 4, 5, 6]);
//! let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false, None);
//! for batch in loader {
//!     let batch = batch.expect("in-range indices");
//!     assert_eq!(batch.len(), 2);
//! }
//! ```

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use gradlet_core::GradletError;

/// Custom collation applied to every batch before it is yielded.
pub type CollateFn<D> = Box<
    dyn Fn(Vec<<D as Dataset>::Item>) -> Result<Vec<<D as Dataset>::Item>, GradletError>
        + Send
        + Sync,
>;

/// Batching iterator over a dataset.
///
/// One pass over the sampler's indices is one epoch; [`DataLoader::reset`]
/// starts the next one.
pub struct DataLoader<D: Dataset, S: Sampler> {
    pub dataset: D,
    pub batch_size: usize,
    pub sampler: S,
    /// If true, a trailing batch smaller than `batch_size` is skipped.
    pub drop_last: bool,
    pub collate_fn: Option<CollateFn<D>>,
    indices_iter: Box<dyn Iterator<Item = usize> + Send + Sync>,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// Creates a new DataLoader.
    ///
    /// A `batch_size` of 0 is treated as 1.
    pub fn new(
        dataset: D,
        batch_size: usize,
        sampler: S,
        drop_last: bool,
        collate_fn: Option<CollateFn<D>>,
    ) -> Self {
        let indices_iter = sampler.iter(dataset.len());
        Self {
            dataset,
            batch_size: batch_size.max(1),
            sampler,
            drop_last,
            collate_fn,
            indices_iter,
        }
    }

    /// Starts a new pass over the dataset, drawing fresh indices from the sampler.
    pub fn reset(&mut self) {
        self.indices_iter = self.sampler.iter(self.dataset.len());
    }

    /// Number of batches in one full pass.
    pub fn num_batches(&self) -> usize {
        let samples = self.sampler.len(self.dataset.len());
        if self.drop_last {
            samples / self.batch_size
        } else {
            (samples + self.batch_size - 1) / self.batch_size
        }
    }
}

impl<D: Dataset, S: Sampler> Iterator for DataLoader<D, S> {
    type Item = Result<Vec<<D as Dataset>::Item>, GradletError>;

    /// Returns `Some(Err(_))` if the sampler yields an index the dataset
    /// rejects, and `None` once the pass is exhausted.
    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for _ in 0..self.batch_size {
            match self.indices_iter.next() {
                Some(idx) => match self.dataset.get(idx) {
                    Ok(item) => batch.push(item),
                    Err(e) => return Some(Err(e)),
                },
                None => break,
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        match self.collate_fn {
            Some(ref collate_fn) => Some(collate_fn(batch)),
            None => Some(Ok(batch)),
        }
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;

//! Data loading utilities: datasets, index samplers and a batching
//! [`DataLoader`].
//!
//! Samples are stored as plain numbers; they are lifted to graph leaves
//! (`gradlet_core::Value`) only when a forward pass needs them.

pub mod dataloader;
pub mod datasets;
pub mod samplers;

pub use dataloader::DataLoader;
pub use datasets::{half_plane, Dataset, Sample, VecDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};

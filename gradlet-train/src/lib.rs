//! Training driver: fits an [`Mlp`](gradlet_core::nn::Mlp) to a synthetic
//! half-plane classification task with plain gradient descent.

pub mod config;
pub mod trainer;

pub use config::TrainConfig;
pub use trainer::{Prediction, TrainReport, Trainer};

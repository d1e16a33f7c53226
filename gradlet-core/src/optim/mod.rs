// gradlet-core/src/optim/mod.rs

//! Optimizers for training neural networks.
//!
//! This module provides the `Optimizer` trait, the `SgdOptimizer`
//! implementation and gradient clipping utilities.

pub mod grad_clipping;
pub mod optimizer_trait;
pub mod sgd;

pub use grad_clipping::{clip_grad_norm_, clip_grad_value_};
pub use optimizer_trait::Optimizer;
pub use sgd::SgdOptimizer;

//! Reverse-mode differentiation over graphs of [`Value`](crate::Value) nodes.
//!
//! - [`backward_op`]: the per-operation backward steps.
//! - [`graph`]: node identity and the topological ordering used by `backward()`.
//! - [`grad_check`]: finite-difference verification of analytical gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use grad_check::{check_grad, GradCheckError};
pub use graph::{topological_sort, zero_grad_graph, NodeId};

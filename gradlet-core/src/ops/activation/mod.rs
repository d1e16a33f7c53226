//! Nonlinear activations on scalar nodes.

pub mod relu;
pub mod tanh;

pub use relu::relu_op;
pub use tanh::tanh_op;

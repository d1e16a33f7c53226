//! # Scalar Operations Module (`ops`)
//!
//! Every operation has a core function named `xxx_op` that computes the
//! forward value and links the new node to its operands through a
//! [`BackwardOp`](crate::autograd::BackwardOp) variant. The same operations
//! are reachable through `std::ops` operators (`&a + &b`, `a * 2.0`, `-a`)
//! and inherent methods (`a.pow(2.0)`, `a.tanh()`, `a.exp()`, `a.relu()`).
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`activation`]: relu, tanh.
//! - [`math_elem`]: exp.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

pub use activation::{relu_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::exp_op;

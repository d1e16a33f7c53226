//! Scalar reverse-mode automatic differentiation and a small neural network
//! library built on it.
//!
//! Every [`Value`] is one node of a dynamically built computation graph.
//! Calling [`Value::backward`] on a result fills in the gradient of every
//! node it depends on.

pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod utils;
pub mod value;
pub mod value_data;

pub use error::GradletError;
pub use value::Value;
// Re-export traits required by public functions/structs
pub use num_traits;

// src/nn/mod.rs

pub mod activation;
pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod parameter;

pub use activation::Activation;
pub use layers::{Layer, Mlp, Neuron};
pub use losses::{MSELoss, Reduction};
pub use module::Module;
pub use parameter::Parameter;

use crate::error::GradletError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers hold shallow clones of the parameters they update, so the
/// changes are visible through the module that owns them.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// Reads each parameter's accumulated `grad` and updates its `data`.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the step was successful, or a `GradletError` otherwise.
    fn step(&mut self) -> Result<(), GradletError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// This is typically called before the backward pass in a new training iteration
    /// to prevent gradients from accumulating across iterations.
    fn zero_grad(&mut self);

    /// Current learning rate.
    fn lr(&self) -> f64;

    /// Sets the learning rate for subsequent steps.
    ///
    /// # Errors
    /// `InvalidArgument` if `lr` is negative or not finite.
    fn set_lr(&mut self, lr: f64) -> Result<(), GradletError>;
}

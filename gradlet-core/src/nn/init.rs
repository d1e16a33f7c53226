//! In-place initialization of parameters.
//!
//! Every function accepts anything that yields nodes (`&[Value]`,
//! `Vec<&Parameter>`, ...) and overwrites their forward values. Gradients and
//! graph structure are left untouched.

use crate::error::GradletError;
use crate::value::Value;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

/// Fills each node with a sample drawn from `U(low, high)`.
///
/// # Errors
/// `InvalidArgument` if the bounds are not finite or `low >= high`.
pub fn uniform_<I, R>(values: I, low: f64, high: f64, rng: &mut R) -> Result<(), GradletError>
where
    I: IntoIterator,
    I::Item: AsRef<Value>,
    R: Rng + ?Sized,
{
    if !(low.is_finite() && high.is_finite() && low < high) {
        return Err(GradletError::InvalidArgument(format!(
            "uniform_ requires finite bounds with low < high, got [{}, {})",
            low, high
        )));
    }
    let dist = Uniform::new(low, high);
    for value in values {
        value.as_ref().set_data(dist.sample(rng));
    }
    Ok(())
}

/// Fills each node with a sample drawn from `N(mean, std^2)`.
///
/// # Errors
/// `InvalidArgument` if `std` is negative or either argument is not finite.
pub fn normal_<I, R>(values: I, mean: f64, std: f64, rng: &mut R) -> Result<(), GradletError>
where
    I: IntoIterator,
    I::Item: AsRef<Value>,
    R: Rng + ?Sized,
{
    if !(mean.is_finite() && std.is_finite()) {
        return Err(GradletError::InvalidArgument(format!(
            "normal_ requires finite mean and std, got mean={} std={}",
            mean, std
        )));
    }
    let dist = Normal::new(mean, std)
        .map_err(|e| GradletError::InvalidArgument(format!("normal_: {}", e)))?;
    for value in values {
        value.as_ref().set_data(dist.sample(rng));
    }
    Ok(())
}

/// Fills each node with `constant`.
pub fn constant_<I>(values: I, constant: f64)
where
    I: IntoIterator,
    I::Item: AsRef<Value>,
{
    for value in values {
        value.as_ref().set_data(constant);
    }
}

/// Fills each node with the scalar value 0.
pub fn zeros_<I>(values: I)
where
    I: IntoIterator,
    I::Item: AsRef<Value>,
{
    constant_(values, 0.0)
}

/// Fills each node with the scalar value 1.
pub fn ones_<I>(values: I)
where
    I: IntoIterator,
    I::Item: AsRef<Value>,
{
    constant_(values, 1.0)
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;

use crate::error::GradletError;
use crate::value::Value;
use log::warn;

/// Clips gradients in place to the range `[-clip_value, clip_value]`.
///
/// # Errors
///
/// Returns `GradletError::InvalidArgument` if `clip_value` is negative or NaN.
pub fn clip_grad_value_<I>(parameters: I, clip_value: f64) -> Result<(), GradletError>
where
    I: IntoIterator,
    I::Item: AsRef<Value>,
{
    if !(clip_value >= 0.0) {
        return Err(GradletError::InvalidArgument(
            "clip_value must be non-negative".to_string(),
        ));
    }

    for param in parameters {
        let param = param.as_ref();
        param.set_grad(param.grad().clamp(-clip_value, clip_value));
    }
    Ok(())
}

/// Clips the overall norm of gradients in place.
///
/// The gradients are viewed as a single vector; if its `norm_type`-norm
/// exceeds `max_norm`, all of them are scaled by
/// `max_norm / (total_norm + 1e-6)`. `norm_type = f64::INFINITY` uses the
/// largest absolute gradient.
///
/// Returns the total norm measured before clipping.
///
/// # Errors
///
/// Returns `GradletError::InvalidArgument` if `max_norm` is negative or
/// `norm_type` is not positive.
pub fn clip_grad_norm_<I>(parameters: I, max_norm: f64, norm_type: f64) -> Result<f64, GradletError>
where
    I: IntoIterator,
    I::Item: AsRef<Value>,
{
    if !(max_norm >= 0.0) {
        return Err(GradletError::InvalidArgument(
            "max_norm must be non-negative".to_string(),
        ));
    }
    if !(norm_type > 0.0) {
        return Err(GradletError::InvalidArgument(
            "norm_type must be positive".to_string(),
        ));
    }

    let params: Vec<I::Item> = parameters.into_iter().collect();
    let grads = params.iter().map(|p| p.as_ref().grad().abs());
    let total_norm = if norm_type == f64::INFINITY {
        grads.fold(0.0, f64::max)
    } else {
        grads.map(|g| g.powf(norm_type)).sum::<f64>().powf(1.0 / norm_type)
    };

    if !total_norm.is_finite() {
        warn!("clip_grad_norm_: total gradient norm is {}", total_norm);
        return Ok(total_norm);
    }

    if total_norm > max_norm {
        let clip_coef = max_norm / (total_norm + 1e-6);
        if clip_coef < 1.0 {
            for param in &params {
                let param = param.as_ref();
                param.set_grad(param.grad() * clip_coef);
            }
        }
    }
    Ok(total_norm)
}

#[cfg(test)]
#[path = "grad_clipping_test.rs"]
mod tests;

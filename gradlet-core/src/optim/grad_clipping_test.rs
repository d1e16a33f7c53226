use super::*;
use crate::nn::Parameter;
use approx::assert_relative_eq;

fn params_with_grads(grads: &[f64]) -> Vec<Parameter> {
    grads
        .iter()
        .map(|&g| {
            let p = Parameter::new(Value::new(0.0), Some("test_param".to_string()));
            p.set_grad(g);
            p
        })
        .collect()
}

fn grads(params: &[Parameter]) -> Vec<f64> {
    params.iter().map(|p| p.grad()).collect()
}

#[test]
fn test_clip_grad_value() -> Result<(), GradletError> {
    let params = params_with_grads(&[-5.0, 2.0, 3.0, -0.5]);
    clip_grad_value_(&params, 1.0)?;
    assert_eq!(grads(&params), vec![-1.0, 1.0, 1.0, -0.5]);
    Ok(())
}

#[test]
fn test_clip_grad_value_negative_is_error() {
    let params = params_with_grads(&[1.0]);
    assert!(matches!(
        clip_grad_value_(&params, -1.0),
        Err(GradletError::InvalidArgument(_))
    ));
    assert_eq!(grads(&params), vec![1.0]);
}

#[test]
fn test_clip_grad_norm_scales_down() -> Result<(), GradletError> {
    let params = params_with_grads(&[3.0, 4.0]);
    let total = clip_grad_norm_(&params, 1.0, 2.0)?;
    assert_relative_eq!(total, 5.0);
    let clipped = grads(&params);
    let new_norm = (clipped[0].powi(2) + clipped[1].powi(2)).sqrt();
    assert_relative_eq!(new_norm, 1.0, epsilon = 1e-5);
    assert_relative_eq!(clipped[0] / clipped[1], 0.75, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_clip_grad_norm_below_threshold_is_noop() -> Result<(), GradletError> {
    let params = params_with_grads(&[0.3, -0.4]);
    let total = clip_grad_norm_(&params, 1.0, 2.0)?;
    assert_relative_eq!(total, 0.5, epsilon = 1e-12);
    assert_eq!(grads(&params), vec![0.3, -0.4]);
    Ok(())
}

#[test]
fn test_clip_grad_norm_infinity_and_l1() -> Result<(), GradletError> {
    let params = params_with_grads(&[1.0, -3.0, 2.0]);
    assert_eq!(clip_grad_norm_(&params, 10.0, f64::INFINITY)?, 3.0);
    assert_relative_eq!(clip_grad_norm_(&params, 10.0, 1.0)?, 6.0);
    Ok(())
}

#[test]
fn test_clip_grad_norm_invalid_arguments() {
    let params = params_with_grads(&[1.0]);
    assert!(clip_grad_norm_(&params, -1.0, 2.0).is_err());
    assert!(clip_grad_norm_(&params, 1.0, 0.0).is_err());
}

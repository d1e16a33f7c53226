//! Arithmetic operations on scalar nodes.
//!
//! `add` and `mul` are graph primitives. `neg`, `sub` and `div` are defined
//! through them (`-a = a * -1`, `a - b = a + (-b)`, `a / b = a * b^-1`), so
//! their gradients follow from the primitives' rules.

/// Implements a binary operator trait for every combination of owned and
/// borrowed `Value`s plus raw `f64`s on either side, and the matching
/// `*Assign` trait, all forwarding to `$op_fn(&Value, &Value) -> Value`.
///
/// Raw numbers are lifted to fresh leaves.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op_fn:path) => {
        impl std::ops::$trait<&$crate::value::Value> for &$crate::value::Value {
            type Output = $crate::value::Value;
            fn $method(self, rhs: &$crate::value::Value) -> Self::Output {
                $op_fn(self, rhs)
            }
        }

        impl std::ops::$trait<$crate::value::Value> for &$crate::value::Value {
            type Output = $crate::value::Value;
            fn $method(self, rhs: $crate::value::Value) -> Self::Output {
                $op_fn(self, &rhs)
            }
        }

        impl std::ops::$trait<&$crate::value::Value> for $crate::value::Value {
            type Output = $crate::value::Value;
            fn $method(self, rhs: &$crate::value::Value) -> Self::Output {
                $op_fn(&self, rhs)
            }
        }

        impl std::ops::$trait<$crate::value::Value> for $crate::value::Value {
            type Output = $crate::value::Value;
            fn $method(self, rhs: $crate::value::Value) -> Self::Output {
                $op_fn(&self, &rhs)
            }
        }

        impl std::ops::$trait<f64> for &$crate::value::Value {
            type Output = $crate::value::Value;
            fn $method(self, rhs: f64) -> Self::Output {
                $op_fn(self, &$crate::value::Value::new(rhs))
            }
        }

        impl std::ops::$trait<f64> for $crate::value::Value {
            type Output = $crate::value::Value;
            fn $method(self, rhs: f64) -> Self::Output {
                $op_fn(&self, &$crate::value::Value::new(rhs))
            }
        }

        impl std::ops::$trait<&$crate::value::Value> for f64 {
            type Output = $crate::value::Value;
            fn $method(self, rhs: &$crate::value::Value) -> Self::Output {
                $op_fn(&$crate::value::Value::new(self), rhs)
            }
        }

        impl std::ops::$trait<$crate::value::Value> for f64 {
            type Output = $crate::value::Value;
            fn $method(self, rhs: $crate::value::Value) -> Self::Output {
                $op_fn(&$crate::value::Value::new(self), &rhs)
            }
        }

        impl std::ops::$assign_trait<&$crate::value::Value> for $crate::value::Value {
            fn $assign_method(&mut self, rhs: &$crate::value::Value) {
                *self = $op_fn(self, rhs);
            }
        }

        impl std::ops::$assign_trait<$crate::value::Value> for $crate::value::Value {
            fn $assign_method(&mut self, rhs: $crate::value::Value) {
                *self = $op_fn(self, &rhs);
            }
        }

        impl std::ops::$assign_trait<f64> for $crate::value::Value {
            fn $assign_method(&mut self, rhs: f64) {
                *self = $op_fn(self, &$crate::value::Value::new(rhs));
            }
        }
    };
}

pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;

pub use add::add_op;
pub use div::div_op;
pub use mul::mul_op;
pub use neg::neg_op;
pub use pow::pow_op;
pub use sub::sub_op;

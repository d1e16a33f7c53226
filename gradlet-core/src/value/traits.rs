// src/value/traits.rs

use crate::value::Value;
use num_traits::{One, Zero};
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::rc::Rc;

impl Clone for Value {
    /// Shallow clone: the new handle refers to the same node.
    fn clone(&self) -> Self {
        Value {
            node: Rc::clone(&self.node),
        }
    }
}

impl Debug for Value {
    /// Shows the node's own fields only; operands are not expanded.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(f, "Value(data={}, grad={}", guard.data, guard.grad)?;
        let op = guard.op_label();
        if !op.is_empty() {
            write!(f, ", op={:?}", op)?;
        }
        if !guard.label.is_empty() {
            write!(f, ", label={:?}", guard.label)?;
        }
        write!(f, ")")
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={})", self.data())
    }
}

impl PartialEq for Value {
    /// Identity comparison. Numeric equality is `a.data() == b.data()`.
    fn eq(&self, other: &Self) -> bool {
        Value::ptr_eq(self, other)
    }
}

impl Eq for Value {}

impl Hash for Value {
    /// Hashes the node address, consistent with `PartialEq`.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node_id().hash(state);
    }
}

impl AsRef<Value> for Value {
    fn as_ref(&self) -> &Value {
        self
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::new(0.0)
    }
}

impl Zero for Value {
    fn zero() -> Self {
        Value::new(0.0)
    }

    fn is_zero(&self) -> bool {
        self.data() == 0.0
    }
}

impl One for Value {
    fn one() -> Self {
        Value::new(1.0)
    }
}

impl Sum for Value {
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Self {
        iter.fold(Value::zero(), |acc, v| acc + v)
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Self {
        iter.fold(Value::zero(), |acc, v| acc + v)
    }
}

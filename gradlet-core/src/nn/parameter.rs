use crate::value::Value;
use std::fmt;
use std::ops::Deref;

/// A wrapper around a leaf [`Value`] indicating it is a learnable parameter
/// of a Module.
///
/// Cloning a `Parameter` is shallow: the clone refers to the same node, so an
/// optimizer holding clones updates the module's own weights.
#[derive(Clone)]
pub struct Parameter {
    value: Value,
    name: Option<String>,
}

impl Parameter {
    /// Creates a new Parameter from a leaf node.
    pub fn new(value: Value, name: Option<String>) -> Self {
        Parameter { value, name }
    }

    pub fn new_unnamed(value: Value) -> Self {
        Parameter { value, name: None }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns a handle to the underlying node.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consumes the Parameter and returns the underlying node.
    pub fn into_inner(self) -> Value {
        self.value
    }
}

// Allow accessing the underlying Value via Deref.
impl Deref for Parameter {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl AsRef<Value> for Parameter {
    fn as_ref(&self) -> &Value {
        &self.value
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Parameter({}: {:?})", name, self.value),
            None => write!(f, "Parameter({:?})", self.value),
        }
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;

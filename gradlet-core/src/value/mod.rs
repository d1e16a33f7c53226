// src/value/mod.rs

use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod autograd_methods;
mod traits;

/// A scalar node of the computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** the same node can be the operand of many
///     operations (a weight reused across examples, `a * a`, ...). Clones are
///     cheap and refer to the same node.
/// 2.  **Interior Mutability:** `grad` is accumulated during `backward()` and
///     `data` is updated by optimizers through shared handles.
///
/// Equality and hashing are based on node identity, never on the numeric
/// value: two leaves holding `1.0` are different nodes.
///
/// `Value` is intentionally neither `Send` nor `Sync`. A graph lives on one
/// thread for one forward/backward cycle.
pub struct Value {
    pub(crate) node: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a leaf node (input, constant or trainable parameter).
    pub fn new(data: f64) -> Self {
        Value {
            node: Rc::new(RefCell::new(ValueData::new(data))),
        }
    }

    /// Creates an internal node whose backward step is `grad_fn`.
    pub(crate) fn from_op(data: f64, grad_fn: BackwardOp) -> Self {
        Value {
            node: Rc::new(RefCell::new(ValueData::with_grad_fn(data, grad_fn))),
        }
    }

    /// Attaches a user-facing name to this node and returns it.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.write_data().label = label.into();
        self
    }

    /// Returns the forward value.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Overwrites the forward value.
    ///
    /// Nodes derived from this one are not recomputed; the next forward pass
    /// builds a new graph.
    pub fn set_data(&self, data: f64) {
        self.write_data().data = data;
    }

    /// Adds `delta` to the forward value (`data += delta`).
    pub fn add_to_data(&self, delta: f64) {
        self.write_data().data += delta;
    }

    /// Subtracts `delta` from the forward value (`data -= delta`).
    pub fn sub_data(&self, delta: f64) {
        self.write_data().data -= delta;
    }

    pub fn label(&self) -> String {
        self.read_data().label.clone()
    }

    /// Diagnostic tag of the operation that produced this node
    /// (`"+"`, `"*"`, `"**2"`, `"tanh"`, `"exp"`, `"ReLU"`), empty for leaves.
    pub fn op(&self) -> String {
        self.read_data().op_label()
    }

    /// Returns `true` if this node was not produced by an operation.
    pub fn is_leaf(&self) -> bool {
        self.read_data().grad_fn.is_none()
    }

    /// Returns handles to the direct operands of this node.
    pub fn operands(&self) -> Vec<Value> {
        match self.read_data().grad_fn.as_ref() {
            Some(op) => op.inputs().into_iter().cloned().collect(),
            None => Vec::new(),
        }
    }

    /// Borrows the node storage immutably.
    ///
    /// Panics if the node is currently mutably borrowed, which cannot happen
    /// through the public API outside of a backward step.
    pub fn read_data(&self) -> Ref<'_, ValueData> {
        self.node.borrow()
    }

    /// Borrows the node storage mutably.
    pub fn write_data(&self) -> RefMut<'_, ValueData> {
        self.node.borrow_mut()
    }

    /// Identity of the node, stable across clones of the handle.
    pub fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.node)
    }

    /// Returns `true` if both handles refer to the same node.
    pub fn ptr_eq(lhs: &Self, rhs: &Self) -> bool {
        Rc::ptr_eq(&lhs.node, &rhs.node)
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;

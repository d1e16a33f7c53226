// src/value_data.rs
use crate::autograd::BackwardOp;
use std::rc::Rc;

/// Internal storage for a [`Value`](crate::Value) node.
///
/// It is wrapped in `Rc<RefCell<ValueData>>` by `Value` so that several
/// consumers can share an operand and gradients can be accumulated through
/// shared handles.
#[derive(Debug)]
pub struct ValueData {
    /// Forward value. Mutated in place by optimizer steps.
    pub(crate) data: f64,
    /// Accumulated gradient of the last backward root with respect to this node.
    pub(crate) grad: f64,
    /// The operation that produced this node, holding its operands.
    /// Leaves (inputs, constants, parameters) have `grad_fn = None`.
    pub(crate) grad_fn: Option<BackwardOp>,
    /// Optional user-facing name.
    pub(crate) label: String,
}

impl ValueData {
    /// Creates the storage of a leaf node with zero gradient.
    pub fn new(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            grad_fn: None,
            label: String::new(),
        }
    }

    /// Creates the storage of a node produced by `grad_fn`.
    pub(crate) fn with_grad_fn(data: f64, grad_fn: BackwardOp) -> Self {
        ValueData {
            data,
            grad: 0.0,
            grad_fn: Some(grad_fn),
            label: String::new(),
        }
    }

    /// Diagnostic tag of the producing operation, empty for leaves.
    pub fn op_label(&self) -> String {
        self.grad_fn
            .as_ref()
            .map(BackwardOp::label)
            .unwrap_or_default()
    }
}

// Dropping the root of a long chain would otherwise recurse once per node.
// Operands that are uniquely owned by the node being dropped are unlinked
// onto a work list instead.
impl Drop for ValueData {
    fn drop(&mut self) {
        let mut pending: Vec<BackwardOp> = self.grad_fn.take().into_iter().collect();
        while let Some(op) = pending.pop() {
            for input in op.into_inputs() {
                if let Ok(cell) = Rc::try_unwrap(input.node) {
                    let mut inner = cell.into_inner();
                    if let Some(next) = inner.grad_fn.take() {
                        pending.push(next);
                    }
                }
            }
        }
    }
}

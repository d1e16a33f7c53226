use crate::autograd::graph::topological_sort;
use crate::value::Value;
use log::{debug, trace};

impl Value {
    /// Returns the accumulated gradient.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Overwrites the accumulated gradient.
    pub fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Accumulates `delta` into the gradient (`grad += delta`).
    pub fn acc_grad(&self, delta: f64) {
        self.write_data().grad += delta;
    }

    /// Resets the gradient of this node only.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    /// Performs the backward pass starting from this node.
    ///
    /// After it returns, every node reachable from `self` holds in `grad` the
    /// partial derivative of `self` with respect to that node.
    ///
    /// Leaf gradients are accumulated (`+=`), never overwritten: a second call
    /// without zeroing the leaves first adds a second full contribution on top
    /// of the first. Gradients of intermediate nodes are recomputed from zero
    /// on each call, so the root is seeded with `1.0` and every leaf receives
    /// exactly one derivative per call.
    ///
    /// The traversal uses an explicit work stack, so long chains do not grow
    /// the call stack.
    pub fn backward(&self) {
        let sorted_nodes = topological_sort(self);
        debug!(
            "backward(): {} nodes reachable from root {:?}",
            sorted_nodes.len(),
            self.node_id()
        );

        for node in sorted_nodes.iter().filter(|node| !node.is_leaf()) {
            node.zero_grad();
        }
        self.set_grad(1.0);

        // Consumers run before producers, so each node's grad is complete
        // by the time its own step reads it.
        for node in sorted_nodes.iter().rev() {
            let (grad_fn, grad_output, output_data) = {
                let guard = node.read_data();
                match guard.grad_fn.as_ref() {
                    Some(op) => (op.clone(), guard.grad, guard.data),
                    None => continue,
                }
            };
            trace!(
                "backward step {:?} [{}] grad={}",
                node.node_id(),
                grad_fn.label(),
                grad_output
            );
            grad_fn.backward(grad_output, output_data);
        }
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;

use crate::value::Value;
use crate::value_data::ValueData;
use std::cell::RefCell;
use std::collections::HashSet;

/// Identity of a graph node: the address of its shared storage.
///
/// Only used as a key while the nodes are kept alive by the traversal;
/// never dereferenced.
pub type NodeId = *const RefCell<ValueData>;

/// Returns every node reachable from `root` through operand links, each
/// exactly once, ordered so that a node comes after all of its operands.
///
/// `root` is the last element. Walking the result in reverse visits
/// consumers before producers, which is the order the backward pass needs.
///
/// Post-order depth-first traversal with an explicit stack: a node is pushed
/// once to be expanded and once more, below its operands, to be emitted.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Value> = Vec::new();
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        let operands = node.operands();
        stack.push((node, true));
        // Reversed so the first operand is expanded first.
        for input in operands.into_iter().rev() {
            if !visited.contains(&input.node_id()) {
                stack.push((input, false));
            }
        }
    }

    sorted_list
}

/// Resets the gradient of every node reachable from `root`, leaves included.
pub fn zero_grad_graph(root: &Value) {
    for node in topological_sort(root) {
        node.zero_grad();
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;

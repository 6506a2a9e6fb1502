use crate::value::Value;
use crate::value_data::ValueData;
use std::cell::RefCell;
use std::collections::HashSet;

/// Stable identity of a graph node, independent of `Value` handle clones.
/// Used as the key of the visited set during traversal.
pub(crate) type NodeId = *const RefCell<ValueData>;

/// Post-order topological sort of the graph reachable from `root`.
///
/// A node is appended only after all of its predecessors, so processing the
/// returned sequence back-to-front visits every node before any node it
/// depends on; that is exactly the order the backward pass needs.
///
/// Implemented iteratively with an explicit `(node, expanded)` stack so the
/// traversal depth is bounded by heap, not by the call stack, on deep
/// graphs. Each node is pushed twice: once to expand its operands, once
/// (after they are all recorded) to append it.
pub(crate) fn topo_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut ordering: Vec<Value> = Vec::new();
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            ordering.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        let inputs = {
            let inner = node.0.borrow();
            inner.op.as_ref().map(|op| op.inputs()).unwrap_or_default()
        };
        stack.push((node, true));
        for input in inputs {
            stack.push((input, false));
        }
    }

    ordering
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(ordering: &[Value], node: &Value) -> usize {
        ordering
            .iter()
            .position(|candidate| candidate == node)
            .expect("node missing from ordering")
    }

    #[test]
    fn test_single_leaf() {
        let a = Value::new(1.0);
        let ordering = topo_sort(&a);
        assert_eq!(ordering.len(), 1);
        assert_eq!(ordering[0], a);
    }

    #[test]
    fn test_predecessors_come_first() {
        let a = Value::new(2.0);
        let b = Value::new(3.0);
        let c = &a * &b;
        let d = &c + 1.0;
        let ordering = topo_sort(&d);

        assert!(position(&ordering, &a) < position(&ordering, &c));
        assert!(position(&ordering, &b) < position(&ordering, &c));
        assert!(position(&ordering, &c) < position(&ordering, &d));
        assert_eq!(position(&ordering, &d), ordering.len() - 1);
    }

    #[test]
    fn test_diamond_visited_once() {
        // a feeds both p and q; it must appear exactly once, before both.
        let a = Value::new(1.0);
        let p = &a * 2.0;
        let q = &a * 3.0;
        let r = &p + &q;
        let ordering = topo_sort(&r);

        let occurrences = ordering.iter().filter(|node| **node == a).count();
        assert_eq!(occurrences, 1);
        assert!(position(&ordering, &a) < position(&ordering, &p));
        assert!(position(&ordering, &a) < position(&ordering, &q));
    }
}

use crate::autograd::op::Op;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::rc::Rc;

/// Holds the actual scalar payload and autograd metadata for one graph node.
///
/// Wrapped in `Rc<RefCell<...>>` by [`crate::value::Value`] for shared
/// ownership and interior mutability. `op` is fixed at construction; only
/// `data` and `grad` ever change afterwards.
pub(crate) struct ValueData {
    pub(crate) data: f64,
    pub(crate) grad: f64,
    pub(crate) op: Option<Op>,
}

impl ValueData {
    pub(crate) fn leaf(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op: None,
        }
    }

    pub(crate) fn from_op(data: f64, op: Op) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op: Some(op),
        }
    }
}

// Manual implementation: deriving Debug would recurse through the operand
// handles and print the whole upstream graph.
impl Debug for ValueData {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ValueData")
            .field("data", &self.data)
            .field("grad", &self.grad)
            .field("op", &self.op.as_ref().map(|op| op.name()))
            .finish()
    }
}

impl Drop for ValueData {
    /// Unlinks the upstream graph iteratively.
    ///
    /// The default drop glue would release a chain of nodes recursively
    /// through each `Op`'s operand handles, which overflows the stack on
    /// deep graphs. Nodes still reachable through other handles are left
    /// alone (`Rc::try_unwrap` fails) and dropped by their last holder.
    fn drop(&mut self) {
        let mut pending: Vec<Op> = Vec::new();
        if let Some(op) = self.op.take() {
            pending.push(op);
        }
        while let Some(op) = pending.pop() {
            for input in op.into_inputs() {
                if let Ok(cell) = Rc::try_unwrap(input.0) {
                    let mut data = cell.into_inner();
                    if let Some(inner) = data.op.take() {
                        pending.push(inner);
                    }
                }
            }
        }
    }
}

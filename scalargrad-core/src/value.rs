use crate::autograd::graph::{topo_sort, NodeId};
use crate::autograd::op::Op;
use crate::error::ScalarGradError;
use crate::value_data::ValueData;
use log::{debug, trace};
use num_traits::ToPrimitive;
use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// The public, user-facing scalar node type.
///
/// Wraps the internal `ValueData` in an `Rc<RefCell<>>` to allow the shared
/// ownership and interior mutability autograd needs: a node may be an
/// operand of many downstream nodes while user code keeps its own handle to
/// it (e.g. a trainable parameter). Cloning a `Value` is cheap, it only
/// bumps the reference count.
pub struct Value(pub(crate) Rc<RefCell<ValueData>>);

impl Value {
    /// Creates a new leaf node wrapping a raw scalar.
    ///
    /// Leaves have no operation record; their gradient starts at `0.0` and
    /// is only filled in by a backward pass that reaches them.
    pub fn new(data: f64) -> Self {
        Value(Rc::new(RefCell::new(ValueData::leaf(data))))
    }

    /// Creates a leaf from any numeric kind convertible to the engine scalar.
    ///
    /// Fails with [`ScalarGradError::UnsupportedDataType`] when the
    /// conversion is not possible (e.g. an out-of-range big integer).
    pub fn from_num<N: ToPrimitive>(value: N) -> Result<Self, ScalarGradError> {
        let data = value
            .to_f64()
            .ok_or(ScalarGradError::UnsupportedDataType {
                type_name: std::any::type_name::<N>(),
            })?;
        Ok(Value::new(data))
    }

    /// Creates a derived node recording the operation that produced it.
    pub(crate) fn from_op(data: f64, op: Op) -> Self {
        Value(Rc::new(RefCell::new(ValueData::from_op(data, op))))
    }

    // --- Accessors ---

    /// The forward-computed scalar.
    pub fn data(&self) -> f64 {
        self.0.borrow().data
    }

    /// The accumulated gradient. Meaningful only after a backward pass has
    /// reached this node.
    pub fn grad(&self) -> f64 {
        self.0.borrow().grad
    }

    /// Overwrites the forward scalar in place.
    ///
    /// Used by callers that hold leaf handles: parameter updates and the
    /// finite-difference perturbations of the gradient checker. The
    /// operation record is untouched.
    pub fn set_data(&self, data: f64) {
        self.0.borrow_mut().data = data;
    }

    /// Resets the gradient accumulator to `0.0`.
    ///
    /// Backward passes always accumulate, so callers needing fresh
    /// gradients must reset every node they care about first.
    pub fn zero_grad(&self) {
        self.0.borrow_mut().grad = 0.0;
    }

    /// `true` for nodes constructed directly from a raw scalar.
    pub fn is_leaf(&self) -> bool {
        self.0.borrow().op.is_none()
    }

    /// Stable identity of the underlying allocation, used as a graph key.
    pub(crate) fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.0)
    }

    /// Adds a contribution from one downstream consumer to the gradient.
    pub(crate) fn accumulate_grad(&self, contribution: f64) {
        self.0.borrow_mut().grad += contribution;
    }

    // --- Autograd ---

    /// Computes gradients for every node reachable through the predecessor
    /// relation, starting from this node.
    ///
    /// Seeds `self.grad = 1.0`, then walks the recorded topological order
    /// back-to-front, invoking each node's backward rule once all of its
    /// consumers have contributed. There is no implicit reset: calling
    /// `backward` again accumulates on top of the existing gradients.
    pub fn backward(&self) {
        let ordering = topo_sort(self);
        debug!(
            "backward: processing {} nodes in reverse topological order",
            ordering.len()
        );
        self.0.borrow_mut().grad = 1.0;
        for node in ordering.iter().rev() {
            let (data, grad, op) = {
                let inner = node.0.borrow();
                (inner.data, inner.grad, inner.op.clone())
            };
            if let Some(op) = op {
                trace!("backward: {} node, data={}, grad={}", op.name(), data, grad);
                op.backward(data, grad);
            }
        }
    }
}

// --- Trait implementations ---

impl Clone for Value {
    /// Clones the handle (bumps the `Rc` count); both handles refer to the
    /// same graph node.
    fn clone(&self) -> Self {
        Value(Rc::clone(&self.0))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.0.borrow();
        f.debug_struct("Value")
            .field("data", &inner.data)
            .field("grad", &inner.grad)
            .field("op", &inner.op.as_ref().map(|op| op.name()))
            .finish()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value({})", self.data())
    }
}

/// Equality is `Rc` pointer identity, consistent with `Hash`. Two nodes with
/// equal forward values are distinct graph vertices unless they are the same
/// allocation; this is what makes diamond dependencies accumulate correctly.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.0).hash(state);
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl From<f32> for Value {
    fn from(data: f32) -> Self {
        Value::new(f64::from(data))
    }
}

impl From<i32> for Value {
    fn from(data: i32) -> Self {
        Value::new(f64::from(data))
    }
}

impl From<i64> for Value {
    fn from(data: i64) -> Self {
        Value::new(data as f64)
    }
}

use crate::value::Value;

/// Tagged record of the operation that produced a derived node.
///
/// Each variant stores strong handles to its operand nodes plus any raw
/// constant the backward rule needs (the exponent); the operand list *is*
/// the node's predecessor set. Handles only ever point at already-existing
/// nodes, so the graph is acyclic by construction. Cloning is cheap
/// (reference-count bumps and at most one `f64`).
#[derive(Clone)]
pub(crate) enum Op {
    Add(Value, Value),
    Mul(Value, Value),
    Pow(Value, f64),
    Exp(Value),
    Tanh(Value),
    Relu(Value),
}

impl Op {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Op::Add(..) => "add",
            Op::Mul(..) => "mul",
            Op::Pow(..) => "pow",
            Op::Exp(..) => "exp",
            Op::Tanh(..) => "tanh",
            Op::Relu(..) => "relu",
        }
    }

    /// Operand handles in forward order (cloned).
    pub(crate) fn inputs(&self) -> Vec<Value> {
        match self {
            Op::Add(a, b) | Op::Mul(a, b) => vec![a.clone(), b.clone()],
            Op::Pow(a, _) | Op::Exp(a) | Op::Tanh(a) | Op::Relu(a) => vec![a.clone()],
        }
    }

    /// Consumes the record and yields the operand handles, for the iterative
    /// drop in `ValueData`.
    pub(crate) fn into_inputs(self) -> Vec<Value> {
        match self {
            Op::Add(a, b) | Op::Mul(a, b) => vec![a, b],
            Op::Pow(a, _) | Op::Exp(a) | Op::Tanh(a) | Op::Relu(a) => vec![a],
        }
    }

    /// Pushes this node's gradient contribution into its operands.
    ///
    /// `out_data` and `out_grad` are the producing node's forward value and
    /// its already-finalized gradient. Operand scalars are read before any
    /// accumulation so the rules stay correct when both operands are the
    /// same node (e.g. `a * a` contributes `2 * a.data * out_grad`).
    pub(crate) fn backward(&self, out_data: f64, out_grad: f64) {
        match self {
            Op::Add(a, b) => {
                a.accumulate_grad(out_grad);
                b.accumulate_grad(out_grad);
            }
            Op::Mul(a, b) => {
                let a_data = a.data();
                let b_data = b.data();
                a.accumulate_grad(b_data * out_grad);
                b.accumulate_grad(a_data * out_grad);
            }
            Op::Pow(a, exponent) => {
                let base = a.data();
                a.accumulate_grad(exponent * base.powf(exponent - 1.0) * out_grad);
            }
            Op::Exp(a) => {
                // d/dx e^x = e^x, which is exactly the forward output
                a.accumulate_grad(out_data * out_grad);
            }
            Op::Tanh(a) => {
                a.accumulate_grad((1.0 - out_data * out_data) * out_grad);
            }
            Op::Relu(a) => {
                // Gradient flows only through the forward-active branch; an
                // exactly-zero output is treated as inactive.
                if out_data > 0.0 {
                    a.accumulate_grad(out_grad);
                }
            }
        }
    }
}

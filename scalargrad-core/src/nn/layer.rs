use crate::error::ScalarGradError;
use crate::nn::module::Module;
use crate::nn::neuron::{Neuron, Nonlinearity};
use crate::value::Value;

/// A fully-connected row of neurons sharing one input vector.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
    in_features: usize,
}

impl Layer {
    pub fn new(in_features: usize, out_features: usize, nonlinearity: Nonlinearity) -> Self {
        Layer {
            neurons: (0..out_features)
                .map(|_| Neuron::new(in_features, nonlinearity))
                .collect(),
            in_features,
        }
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }

    /// Forward pass, one output per neuron.
    ///
    /// The width check happens here once, before any neuron runs.
    pub fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        if input.len() != self.in_features {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.in_features,
                actual: input.len(),
            });
        }
        self.neurons
            .iter()
            .map(|neuron| neuron.forward(input))
            .collect()
    }
}

impl Module for Layer {
    fn parameters(&self) -> Vec<Value> {
        self.neurons
            .iter()
            .flat_map(|neuron| neuron.parameters())
            .collect()
    }
}

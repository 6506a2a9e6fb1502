use crate::error::ScalarGradError;
use crate::nn::layer::Layer;
use crate::nn::module::Module;
use crate::nn::neuron::Nonlinearity;
use crate::value::Value;
use log::debug;

/// A multi-layer perceptron: hidden layers use ReLU, the output layer tanh.
#[derive(Debug)]
pub struct Mlp {
    layers: Vec<Layer>,
    in_features: usize,
}

impl Mlp {
    /// `layer_sizes` lists the width of every layer after the input, e.g.
    /// `Mlp::new(3, &[4, 4, 1])` builds a 3-4-4-1 network.
    pub fn new(in_features: usize, layer_sizes: &[usize]) -> Self {
        let widths: Vec<usize> = std::iter::once(in_features)
            .chain(layer_sizes.iter().copied())
            .collect();
        let layers = (0..layer_sizes.len())
            .map(|i| {
                let nonlinearity = if i + 1 == layer_sizes.len() {
                    Nonlinearity::Tanh
                } else {
                    Nonlinearity::Relu
                };
                Layer::new(widths[i], widths[i + 1], nonlinearity)
            })
            .collect();
        debug!("mlp: constructed with widths {:?}", widths);
        Mlp {
            layers,
            in_features,
        }
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Threads the input vector through every layer.
    pub fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        if input.len() != self.in_features {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.in_features,
                actual: input.len(),
            });
        }
        let mut activations = input.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }
}

impl Module for Mlp {
    fn parameters(&self) -> Vec<Value> {
        self.layers
            .iter()
            .flat_map(|layer| layer.parameters())
            .collect()
    }
}

use crate::error::ScalarGradError;
use crate::nn::init;
use crate::nn::module::Module;
use crate::value::Value;

/// The nonlinearity applied to a neuron's pre-activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nonlinearity {
    Tanh,
    Relu,
    /// Pass the pre-activation through unchanged.
    None,
}

/// A single scalar neuron: `nonlin(sum(w_i * x_i) + b)`.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    nonlinearity: Nonlinearity,
}

impl Neuron {
    /// Creates a neuron with `in_features` inputs. Weights are drawn from
    /// `U(-1, 1)`, the bias starts at zero.
    pub fn new(in_features: usize, nonlinearity: Nonlinearity) -> Self {
        Neuron {
            weights: init::uniform(in_features, -1.0, 1.0),
            bias: Value::new(0.0),
            nonlinearity,
        }
    }

    pub fn in_features(&self) -> usize {
        self.weights.len()
    }

    pub fn nonlinearity(&self) -> Nonlinearity {
        self.nonlinearity
    }

    /// Forward pass over one input vector.
    ///
    /// Fails with [`ScalarGradError::DimensionMismatch`] when the input
    /// length disagrees with `in_features`.
    pub fn forward(&self, input: &[Value]) -> Result<Value, ScalarGradError> {
        if input.len() != self.weights.len() {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.weights.len(),
                actual: input.len(),
            });
        }

        // Seed the sum with the bias handle so it joins the graph once.
        let mut activation = self.bias.clone();
        for (weight, x) in self.weights.iter().zip(input) {
            activation = &activation + &(weight * x);
        }

        Ok(match self.nonlinearity {
            Nonlinearity::Tanh => activation.tanh(),
            Nonlinearity::Relu => activation.relu(),
            Nonlinearity::None => activation,
        })
    }
}

impl Module for Neuron {
    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn neuron_with_weights(weights: &[f64], bias: f64, nonlinearity: Nonlinearity) -> Neuron {
        let neuron = Neuron::new(weights.len(), nonlinearity);
        for (param, w) in neuron.weights.iter().zip(weights) {
            param.set_data(*w);
        }
        neuron.bias.set_data(bias);
        neuron
    }

    #[test]
    fn test_parameter_count() {
        let neuron = Neuron::new(3, Nonlinearity::Tanh);
        assert_eq!(neuron.parameters().len(), 4); // 3 weights + bias
        assert_eq!(neuron.in_features(), 3);
    }

    #[test]
    fn test_forward_linear() {
        let neuron = neuron_with_weights(&[2.0, -1.0], 0.5, Nonlinearity::None);
        let input = vec![Value::new(1.0), Value::new(3.0)];
        let out = neuron.forward(&input).unwrap();
        assert_relative_eq!(out.data(), 2.0 * 1.0 - 1.0 * 3.0 + 0.5);
    }

    #[test]
    fn test_forward_tanh() {
        let neuron = neuron_with_weights(&[1.0], 0.0, Nonlinearity::Tanh);
        let input = vec![Value::new(0.25)];
        let out = neuron.forward(&input).unwrap();
        assert_relative_eq!(out.data(), 0.25f64.tanh(), max_relative = 1e-12);
    }

    #[test]
    fn test_forward_dimension_mismatch() {
        let neuron = Neuron::new(2, Nonlinearity::Relu);
        let input = vec![Value::new(1.0)];
        assert_eq!(
            neuron.forward(&input),
            Err(ScalarGradError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_backward_reaches_weights_and_bias() {
        let neuron = neuron_with_weights(&[0.5, -0.5], 0.1, Nonlinearity::None);
        let input = vec![Value::new(2.0), Value::new(4.0)];
        let out = neuron.forward(&input).unwrap();
        out.backward();

        // d(out)/dw_i = x_i, d(out)/db = 1
        assert_relative_eq!(neuron.weights[0].grad(), 2.0);
        assert_relative_eq!(neuron.weights[1].grad(), 4.0);
        assert_relative_eq!(neuron.bias.grad(), 1.0);
    }
}

use crate::value::Value;
use rand_distr::{Distribution, Normal, Uniform};

/// Leaf values drawn from `U(low, high)`, the initialization the neuron
/// weights use.
pub fn uniform(n: usize, low: f64, high: f64) -> Vec<Value> {
    let mut rng = rand::thread_rng();
    let dist = Uniform::new_inclusive(low, high);
    (0..n).map(|_| Value::new(dist.sample(&mut rng))).collect()
}

/// Leaf values drawn from `N(mean, std_dev)`.
pub fn normal(n: usize, mean: f64, std_dev: f64) -> Vec<Value> {
    let mut rng = rand::thread_rng();
    let dist = Normal::new(mean, std_dev).expect("std_dev must be finite and non-negative");
    (0..n).map(|_| Value::new(dist.sample(&mut rng))).collect()
}

// Declares the main modules of the crate
pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod utils;
pub mod value;
pub(crate) mod value_data;

// Re-export the node type so it is reachable as `scalargrad_core::Value`
pub use value::Value;
// Re-export traits required by public constructors (`Value::from_num`)
pub use num_traits;

pub use error::ScalarGradError;

pub mod grad_check;
pub(crate) mod graph;
pub(crate) mod op;

pub use grad_check::{check_grad, GradCheckError};

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

mod errors;
mod generator;
mod mwc256;

pub use errors::*;
pub use generator::*;
pub use mwc256::*;

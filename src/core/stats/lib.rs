mod regression;

pub use regression::*;

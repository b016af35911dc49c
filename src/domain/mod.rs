// Domain layer: the string operations, report models and ports.

pub mod model;
pub mod ports;
pub mod strings;

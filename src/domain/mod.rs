// Domain layer: plain data types and the ports (interfaces) around the pure core.

pub mod model;
pub mod ports;

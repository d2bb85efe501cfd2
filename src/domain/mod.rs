// Domain layer: run inputs, per-file results and the ports the core depends on.

pub mod model;
pub mod ports;

// Domain layer: core models and ports (interfaces). No transport details here.

pub mod model;
pub mod ports;

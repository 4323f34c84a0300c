// Domain layer: core models and ports. No HTTP or configuration concerns here.

pub mod model;
pub mod ports;

// Domain layer: listing models, capability traits and the source port.

pub mod model;
pub mod ports;

// Domain layer: breed records, preferences and ports. No I/O here.

pub mod model;
pub mod ports;
pub mod preferences;

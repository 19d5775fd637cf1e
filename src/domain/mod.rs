// Domain layer: API resource models, request parameters and ports (interfaces).

pub mod model;
pub mod params;
pub mod ports;

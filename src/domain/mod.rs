// Domain layer: models and ports (collaborator interfaces). No I/O here.

pub mod model;
pub mod ports;

// Domain layer: tool arguments, carrier request/response models, schemas and ports.

pub mod arguments;
pub mod model;
pub mod ports;
pub mod schema;

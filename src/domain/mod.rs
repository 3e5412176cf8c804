// Domain layer: core models and ports (interfaces) the host system implements.

pub mod catalog;
pub mod model;
pub mod ports;

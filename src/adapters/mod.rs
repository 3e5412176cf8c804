// Adapters layer: concrete implementations at the host boundary (orders, batch files, output).

pub mod batch;
pub mod order;
pub mod output;

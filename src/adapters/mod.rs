// Adapters layer: concrete implementations at the edges (rendering, CSV batch files).

pub mod batch;
pub mod render;

mod csr;
pub mod graph;
pub mod residual;
pub mod solution;
pub mod status;
pub mod successive_shortest_path;

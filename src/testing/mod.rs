pub mod grids;
pub mod random_graphs;

mod read;
mod write;

pub use read::read_observations_csv;
pub use write::write_edge_list;

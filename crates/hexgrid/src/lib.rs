pub mod cell;
pub mod grid;
pub mod h3;

pub use cell::GridCell;
pub use grid::{GridError, GridIndex};
pub use h3::H3Grid;

mod observation;
mod transitions;

pub use observation::{read_observations, Observation};
pub use transitions::{aggregate, TransitionRow};

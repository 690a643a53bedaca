pub mod state_cell;

pub use state_cell::{create_state, StateCell};

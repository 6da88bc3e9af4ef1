pub mod error;
pub mod minimum_cost_flow;

pub use error::{FlowError, InvalidRequest};

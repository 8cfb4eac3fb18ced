pub mod engine;
pub mod euclid;
pub mod parse;
pub mod pipeline;

pub use crate::domain::model::{Computation, OperandPair};
pub use crate::domain::ports::Pipeline;
pub use crate::utils::error::Result;

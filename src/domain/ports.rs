use crate::domain::model::{Computation, OperandPair};
use crate::utils::error::Result;

/// The read → compute → write flow of the program. Fully synchronous; the
/// program has no suspension points or shared resources.
pub trait Pipeline {
    fn extract(&mut self) -> Result<OperandPair>;
    fn compute(&self, operands: OperandPair) -> Result<Computation>;
    fn load(&mut self, result: Computation) -> Result<()>;
}

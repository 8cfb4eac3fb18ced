use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Drives a pipeline through its three stages in order. Progress goes to the
/// trace log, never to stdout; stdout carries only the result.
pub struct GcdEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> GcdEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&mut self) -> Result<i64> {
        tracing::debug!("Reading operands...");
        let operands = self.pipeline.extract()?;
        tracing::debug!(a = operands.a, b = operands.b, "Read operands");

        let result = self.pipeline.compute(operands)?;
        tracing::debug!(divisor = result.divisor, "Computed GCD");

        self.pipeline.load(result)?;
        tracing::debug!("Result written");

        Ok(result.divisor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pipeline::StdioPipeline;
    use std::io::Cursor;

    #[test]
    fn test_run_returns_divisor() {
        let pipeline = StdioPipeline::new(Cursor::new(b"48 18\n".to_vec()), Vec::new());
        let mut engine = GcdEngine::new(pipeline);
        assert_eq!(engine.run().unwrap(), 6);
    }

    #[test]
    fn test_run_propagates_input_errors() {
        let pipeline = StdioPipeline::new(Cursor::new(b"48\n".to_vec()), Vec::new());
        let mut engine = GcdEngine::new(pipeline);
        assert!(engine.run().is_err());
    }
}

use crate::core::euclid::gcd;
use crate::core::parse;
use crate::domain::model::{Computation, OperandPair};
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// Production pipeline over standard input/output. Generic over the reader
/// and writer so tests can run it against in-memory buffers.
pub struct StdioPipeline<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdioPipeline<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Pipeline for StdioPipeline<R, W> {
    fn extract(&mut self) -> Result<OperandPair> {
        // Consume lines until two tokens have shown up, like `cin >> a >> b`
        // skipping whitespace across line boundaries.
        let mut buf = String::new();
        while parse::count_operands(&buf) < 2 {
            if self.input.read_line(&mut buf)? == 0 {
                break;
            }
        }
        parse::parse_operands(&buf)
    }

    fn compute(&self, operands: OperandPair) -> Result<Computation> {
        Ok(Computation {
            operands,
            divisor: gcd(operands.a, operands.b),
        })
    }

    fn load(&mut self, result: Computation) -> Result<()> {
        writeln!(self.output, "{}", result.divisor)?;
        self.output.flush()?;
        Ok(())
    }
}

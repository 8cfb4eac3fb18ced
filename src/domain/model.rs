use serde::{Deserialize, Serialize};

/// The two operands read from standard input, in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperandPair {
    pub a: i64,
    pub b: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Computation {
    pub operands: OperandPair,
    pub divisor: i64,
}

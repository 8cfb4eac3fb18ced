use crate::domain::model::OperandPair;
use crate::utils::error::{GcdError, Result};

/// Parses the first two whitespace-separated tokens of `input` as signed
/// decimal integers. Tokens beyond the second are ignored, matching the
/// stream-extraction behavior of the original program.
pub fn parse_operands(input: &str) -> Result<OperandPair> {
    let mut tokens = input.split_whitespace();
    let a = next_operand(&mut tokens, 0)?;
    let b = next_operand(&mut tokens, 1)?;
    Ok(OperandPair { a, b })
}

/// Number of whitespace-separated tokens seen so far in `input`.
pub fn count_operands(input: &str) -> usize {
    input.split_whitespace().count()
}

fn next_operand<'t>(tokens: &mut impl Iterator<Item = &'t str>, found: usize) -> Result<i64> {
    let token = tokens.next().ok_or(GcdError::MissingOperands { found })?;
    token
        .parse::<i64>()
        .map_err(|e| GcdError::InvalidOperand {
            token: token.to_string(),
            reason: e.to_string(),
        })
}

/// Greatest common divisor by the iterative Euclidean algorithm.
///
/// Repeatedly replaces `(a, b)` with `(b, a % b)` until `b` reaches zero,
/// then returns `a`. In particular `gcd(a, 0)` is `a` for any `a`.
///
/// Negative operands follow Rust's truncating remainder, so the result can
/// come out negative. Callers that need the mathematical (non-negative) GCD
/// must normalize with `.abs()` themselves.
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let c = a % b;
        a = b;
        b = c;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_pairs() {
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(gcd(17, 13), 1);
        assert_eq!(gcd(1_000_000, 500_000), 500_000);
    }

    #[test]
    fn test_zero_operands() {
        assert_eq!(gcd(5, 0), 5);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn test_matches_recursive_definition() {
        let samples = [(48, 18), (270, 192), (17, 13), (99, 1), (7, 7)];
        for (a, b) in samples {
            assert_eq!(gcd(a, b), gcd(b, a % b), "gcd({a}, {b})");
        }
    }

    #[test]
    fn test_result_symmetric_in_operands() {
        let samples = [(48, 18), (0, 5), (17, 13), (1_000_000, 500_000)];
        for (a, b) in samples {
            assert_eq!(gcd(a, b), gcd(b, a), "gcd({a}, {b})");
        }
    }

    #[test]
    fn test_idempotent_against_zero() {
        let samples = [(48, 18), (17, 13), (5, 0)];
        for (a, b) in samples {
            let d = gcd(a, b);
            assert_eq!(gcd(d, 0), d);
        }
    }

    #[test]
    fn test_negative_operands_keep_truncating_remainder_sign() {
        // Same behavior as the C++ `%` the algorithm was ported from.
        assert_eq!(gcd(-48, 18), 6);
        assert_eq!(gcd(48, -18), -6);
        assert_eq!(gcd(-48, -18), -6);
    }
}

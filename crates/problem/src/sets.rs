use rand::Rng;

use crate::domain::OperandDomain;
use crate::error::ProblemError;
use crate::operation::{Operation, Operator};

/// Attempt budget for rejection sampling before a constraint is declared
/// infeasible.
pub const MAX_SAMPLE_ATTEMPTS: u32 = 100;

/// One declared block of problems: an operator, operand domains and how many
/// operations to produce.
///
/// Division is parameterized by its desired answer (`quotient`) and `divisor`
/// rather than by its operands; the displayed dividend is derived so the
/// division always comes out even.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemSet {
    Addition {
        left: OperandDomain,
        right: OperandDomain,
        count: usize,
    },
    Subtraction {
        left: OperandDomain,
        right: OperandDomain,
        count: usize,
        allow_negative_result: bool,
    },
    Multiplication {
        left: OperandDomain,
        right: OperandDomain,
        count: usize,
    },
    Division {
        quotient: OperandDomain,
        divisor: OperandDomain,
        count: usize,
    },
}

impl ProblemSet {
    /// Number of operations this set produces.
    pub fn count(&self) -> usize {
        match *self {
            ProblemSet::Addition { count, .. }
            | ProblemSet::Subtraction { count, .. }
            | ProblemSet::Multiplication { count, .. }
            | ProblemSet::Division { count, .. } => count,
        }
    }

    /// Generates exactly `count` operations. Every operand is drawn
    /// independently and with replacement; each call samples afresh from the
    /// passed RNG, so memoization is the caller's concern.
    pub fn operations<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<Operation>, ProblemError> {
        match *self {
            ProblemSet::Addition { left, right, count } => (0..count)
                .map(|_| {
                    let left = left.sample(rng);
                    let right = right.sample(rng);
                    Ok(Operation {
                        left,
                        right,
                        operator: Operator::Add,
                        result: left + right,
                    })
                })
                .collect(),
            ProblemSet::Subtraction {
                left,
                right,
                count,
                allow_negative_result,
            } => (0..count)
                .map(|_| {
                    // Strictly greater: pairs with equal operands are rejected
                    // too, so results are always >= 1 when negatives are
                    // disallowed.
                    let (left, right) =
                        sample_pair(left, right, rng, |l, r| allow_negative_result || l > r)?;
                    Ok(Operation {
                        left,
                        right,
                        operator: Operator::Subtract,
                        result: left - right,
                    })
                })
                .collect(),
            ProblemSet::Multiplication { left, right, count } => (0..count)
                .map(|_| {
                    let left = left.sample(rng);
                    let right = right.sample(rng);
                    Ok(Operation {
                        left,
                        right,
                        operator: Operator::Multiply,
                        result: left * right,
                    })
                })
                .collect(),
            ProblemSet::Division {
                quotient,
                divisor,
                count,
            } => (0..count)
                .map(|_| {
                    let right = divisor.sample(rng);
                    let result = quotient.sample(rng);
                    Ok(Operation {
                        left: result * right,
                        right,
                        operator: Operator::Divide,
                        result,
                    })
                })
                .collect(),
        }
    }
}

/// Rejection sampling with a bounded attempt budget: draw independent pairs
/// from the two domains until `accept` passes or the budget is spent.
fn sample_pair<R: Rng + ?Sized>(
    left: OperandDomain,
    right: OperandDomain,
    rng: &mut R,
    accept: impl Fn(i64, i64) -> bool,
) -> Result<(i64, i64), ProblemError> {
    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        let l = left.sample(rng);
        let r = right.sample(rng);
        if accept(l, r) {
            return Ok((l, r));
        }
    }
    Err(ProblemError::InfeasibleConstraint {
        attempts: MAX_SAMPLE_ATTEMPTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn range(min: i64, max: i64) -> OperandDomain {
        OperandDomain::Range(min, max)
    }

    #[test]
    fn addition_produces_consistent_results() {
        let mut rng = StdRng::seed_from_u64(11);
        let set = ProblemSet::Addition {
            left: range(2, 100),
            right: range(200, 300),
            count: 8,
        };
        let ops = set.operations(&mut rng).unwrap();
        assert_eq!(ops.len(), 8);
        for op in &ops {
            assert_eq!(op.operator, Operator::Add);
            assert!((2..=100).contains(&op.left));
            assert!((200..=300).contains(&op.right));
            assert_eq!(op.result, op.left + op.right);
        }
    }

    #[test]
    fn multiplication_produces_consistent_results() {
        let mut rng = StdRng::seed_from_u64(12);
        let set = ProblemSet::Multiplication {
            left: range(2, 10),
            right: range(2, 10),
            count: 6,
        };
        let ops = set.operations(&mut rng).unwrap();
        assert_eq!(ops.len(), 6);
        for op in &ops {
            assert_eq!(op.operator, Operator::Multiply);
            assert_eq!(op.result, op.left * op.right);
        }
    }

    #[test]
    fn subtraction_without_negatives_keeps_results_positive() {
        let mut rng = StdRng::seed_from_u64(13);
        let set = ProblemSet::Subtraction {
            left: range(2, 10),
            right: range(2, 10),
            count: 50,
            allow_negative_result: false,
        };
        let ops = set.operations(&mut rng).unwrap();
        assert_eq!(ops.len(), 50);
        for op in &ops {
            assert_eq!(op.operator, Operator::Subtract);
            assert!(op.left > op.right);
            assert!(op.result >= 1);
            assert_eq!(op.result, op.left - op.right);
        }
    }

    #[test]
    fn subtraction_with_negatives_allowed_skips_the_guard() {
        let mut rng = StdRng::seed_from_u64(14);
        let set = ProblemSet::Subtraction {
            left: range(2, 10),
            right: range(2, 10),
            count: 200,
            allow_negative_result: true,
        };
        let ops = set.operations(&mut rng).unwrap();
        for op in &ops {
            assert_eq!(op.result, op.left - op.right);
        }
        // With symmetric domains and 200 draws, some pair lands left <= right.
        assert!(ops.iter().any(|op| op.result <= 0));
    }

    #[test]
    fn infeasible_subtraction_fails_for_any_seed() {
        // The whole left domain sits below the right domain's minimum, so no
        // draw can ever satisfy the non-negative guard.
        let set = ProblemSet::Subtraction {
            left: range(1, 2),
            right: range(5, 10),
            count: 1,
            allow_negative_result: false,
        };
        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let err = set.operations(&mut rng).unwrap_err();
            assert!(matches!(
                err,
                ProblemError::InfeasibleConstraint {
                    attempts: MAX_SAMPLE_ATTEMPTS
                }
            ));
        }
    }

    #[test]
    fn division_is_always_exact() {
        let mut rng = StdRng::seed_from_u64(15);
        let set = ProblemSet::Division {
            quotient: range(1, 10),
            divisor: range(3, 10),
            count: 40,
        };
        let ops = set.operations(&mut rng).unwrap();
        assert_eq!(ops.len(), 40);
        for op in &ops {
            assert_eq!(op.operator, Operator::Divide);
            assert!((1..=10).contains(&op.result));
            assert!((3..=10).contains(&op.right));
            assert_eq!(op.left, op.result * op.right);
        }
    }

    #[test]
    fn count_zero_yields_no_operations() {
        let mut rng = StdRng::seed_from_u64(16);
        let set = ProblemSet::Addition {
            left: OperandDomain::Fixed(1),
            right: OperandDomain::Fixed(1),
            count: 0,
        };
        assert!(set.operations(&mut rng).unwrap().is_empty());
    }
}

use log::debug;
use once_cell::unsync::OnceCell;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::ProblemError;
use crate::operation::Operation;
use crate::sets::ProblemSet;

/// One student's sheet: an ordered list of problem sets plus its identity.
///
/// The combined operation sequence is computed once and cached, so every
/// consumer (capacity validation, the worksheet page, the answer key) sees
/// the same shuffled order.
#[derive(Debug)]
pub struct Worksheet {
    student_name: String,
    id: String,
    problem_sets: Vec<ProblemSet>,
    operations: OnceCell<Vec<Operation>>,
}

impl Worksheet {
    pub fn new(
        student_name: impl Into<String>,
        id: impl Into<String>,
        problem_sets: Vec<ProblemSet>,
    ) -> Self {
        Self {
            student_name: student_name.into(),
            id: id.into(),
            problem_sets,
            operations: OnceCell::new(),
        }
    }

    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of problems declared across all sets.
    pub fn problem_count(&self) -> usize {
        self.problem_sets.iter().map(ProblemSet::count).sum()
    }

    /// The operations of every problem set, concatenated in declaration order
    /// and shuffled once. The first call generates and caches the sequence;
    /// later calls return it unchanged, whatever RNG they pass.
    pub fn operations<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<&[Operation], ProblemError> {
        let ops = self.operations.get_or_try_init(|| {
            let mut ops = Vec::with_capacity(self.problem_count());
            for set in &self.problem_sets {
                ops.extend(set.operations(rng)?);
            }
            ops.shuffle(rng);
            debug!(
                "worksheet {}/{}: generated {} operations",
                self.student_name,
                self.id,
                ops.len()
            );
            Ok(ops)
        })?;
        Ok(ops.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OperandDomain;
    use crate::operation::Operator;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    fn range(min: i64, max: i64) -> OperandDomain {
        OperandDomain::Range(min, max)
    }

    fn five_set_worksheet() -> Worksheet {
        Worksheet::new(
            "Frances",
            "f-101",
            vec![
                ProblemSet::Addition {
                    left: range(2, 100),
                    right: range(200, 300),
                    count: 5,
                },
                ProblemSet::Subtraction {
                    left: range(2, 10),
                    right: range(2, 10),
                    count: 5,
                    allow_negative_result: false,
                },
                ProblemSet::Subtraction {
                    left: range(2, 10),
                    right: range(2, 10),
                    count: 5,
                    allow_negative_result: true,
                },
                ProblemSet::Multiplication {
                    left: range(2, 10),
                    right: range(2, 10),
                    count: 5,
                },
                ProblemSet::Division {
                    quotient: range(1, 10),
                    divisor: range(3, 10),
                    count: 3,
                },
            ],
        )
    }

    #[test]
    fn concatenates_all_problem_sets() {
        let ws = five_set_worksheet();
        let mut rng = StdRng::seed_from_u64(21);
        let ops = ws.operations(&mut rng).unwrap();
        assert_eq!(ops.len(), 23);
        assert_eq!(ws.problem_count(), 23);
    }

    #[test]
    fn second_call_returns_the_cached_sequence() {
        let ws = five_set_worksheet();
        let mut first_rng = StdRng::seed_from_u64(22);
        let first: Vec<Operation> = ws.operations(&mut first_rng).unwrap().to_vec();

        // A different RNG must not change the cached order.
        let mut second_rng = StdRng::seed_from_u64(99);
        let second = ws.operations(&mut second_rng).unwrap();
        assert_eq!(first.as_slice(), second);
    }

    #[test]
    fn shuffle_preserves_the_operation_multiset() {
        // Fixed domains make each set's output independent of the RNG, so the
        // expected multiset is known exactly.
        let ws = Worksheet::new(
            "Frances",
            "f-102",
            vec![
                ProblemSet::Addition {
                    left: OperandDomain::Fixed(2),
                    right: OperandDomain::Fixed(3),
                    count: 4,
                },
                ProblemSet::Multiplication {
                    left: OperandDomain::Fixed(6),
                    right: OperandDomain::Fixed(7),
                    count: 2,
                },
            ],
        );
        let mut rng = StdRng::seed_from_u64(23);
        let ops = ws.operations(&mut rng).unwrap();

        let mut counts: HashMap<Operation, usize> = HashMap::new();
        for op in ops {
            *counts.entry(*op).or_default() += 1;
        }
        assert_eq!(
            counts[&Operation {
                left: 2,
                right: 3,
                operator: Operator::Add,
                result: 5
            }],
            4
        );
        assert_eq!(
            counts[&Operation {
                left: 6,
                right: 7,
                operator: Operator::Multiply,
                result: 42
            }],
            2
        );
        assert_eq!(counts.values().sum::<usize>(), 6);
    }

    #[test]
    fn generation_failure_propagates() {
        let ws = Worksheet::new(
            "Frances",
            "f-103",
            vec![ProblemSet::Subtraction {
                left: range(1, 2),
                right: range(5, 10),
                count: 1,
                allow_negative_result: false,
            }],
        );
        let mut rng = StdRng::seed_from_u64(24);
        assert!(matches!(
            ws.operations(&mut rng),
            Err(ProblemError::InfeasibleConstraint { .. })
        ));
    }
}

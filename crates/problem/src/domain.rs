use rand::Rng;

/// Where an operand comes from: a fixed value, or an inclusive range that is
/// resolved by uniform sampling each time a problem is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandDomain {
    Fixed(i64),
    Range(i64, i64),
}

impl OperandDomain {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        match *self {
            OperandDomain::Fixed(value) => value,
            OperandDomain::Range(min, max) => rng.random_range(min..=max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn fixed_domain_always_yields_its_value() {
        let mut rng = StdRng::seed_from_u64(1);
        let domain = OperandDomain::Fixed(7);
        for _ in 0..10 {
            assert_eq!(domain.sample(&mut rng), 7);
        }
    }

    #[test]
    fn range_domain_stays_within_inclusive_bounds() {
        let mut rng = StdRng::seed_from_u64(2);
        let domain = OperandDomain::Range(3, 6);
        for _ in 0..100 {
            let value = domain.sample(&mut rng);
            assert!((3..=6).contains(&value));
        }
    }

    #[test]
    fn degenerate_range_is_a_fixed_point() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(OperandDomain::Range(5, 5).sample(&mut rng), 5);
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProblemError {
    /// Rejection sampling spent its whole attempt budget without finding an
    /// acceptable operand pair. With a satisfiable configuration this cannot
    /// happen, so it is surfaced as an internal defect rather than a
    /// configuration error.
    #[error(
        "failed to sample an operand pair satisfying the constraint after {attempts} attempts"
    )]
    InfeasibleConstraint { attempts: u32 },
}

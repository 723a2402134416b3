pub mod domain;
pub mod error;
pub mod operation;
pub mod sets;
pub mod worksheet;

pub use domain::OperandDomain;
pub use error::ProblemError;
pub use operation::{Operation, Operator};
pub use sets::{MAX_SAMPLE_ATTEMPTS, ProblemSet};
pub use worksheet::Worksheet;

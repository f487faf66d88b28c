pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Error for statistic names not recognized at the UI boundary.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("unknown statistic name: {name}")]
pub struct ParseStatisticError {
    #[error(not(source))]
    pub name: String,
}

/// Error for generator shape names not recognized at the UI boundary.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("unknown generator shape: {name}")]
pub struct ParseShapeError {
    #[error(not(source))]
    pub name: String,
}

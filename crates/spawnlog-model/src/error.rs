use thiserror::Error;

use crate::Violation;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("record violates {} contract rule(s): {}", .0.len(), join(.0))]
    Contract(Vec<Violation>),
}

impl ModelError {
    /// Returns the contract violations carried by this error.
    pub fn violations(&self) -> &[Violation] {
        match self {
            ModelError::Contract(v) => v,
        }
    }
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type ModelResult<T> = Result<T, ModelError>;

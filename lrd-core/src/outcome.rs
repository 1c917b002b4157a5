use serde::{Deserialize, Serialize};

/// Binary launch outcome, as encoded by the dataset's `class` column.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Map an outcome class value to an outcome. Anything other than 0 or 1 is `None`.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Default, Serialize, Deserialize)]
pub enum CarStatus {
    #[default]
    Available,
    Unavailable,
}

impl Display for CarStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CarStatus::Available => write!(f, "Available"),
            CarStatus::Unavailable => write!(f, "Unavailable"),
        }
    }
}

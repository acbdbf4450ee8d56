use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum CarCategory {
    Sedan,
    #[serde(rename = "SUV")]
    Suv,
    Hatchback,
    Luxury,
    Electric,
}

impl Display for CarCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CarCategory::Sedan => write!(f, "Sedan"),
            CarCategory::Suv => write!(f, "SUV"),
            CarCategory::Hatchback => write!(f, "Hatchback"),
            CarCategory::Luxury => write!(f, "Luxury"),
            CarCategory::Electric => write!(f, "Electric"),
        }
    }
}

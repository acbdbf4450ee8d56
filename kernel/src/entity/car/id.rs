use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct CarId(String);

impl CarId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

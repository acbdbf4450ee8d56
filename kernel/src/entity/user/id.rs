use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Identity provider uid.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

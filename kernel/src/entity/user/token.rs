use std::fmt::{Debug, Formatter};
use vodca::AsRefln;

/// Bearer token issued by the identity provider, forwarded verbatim to the rental API.
#[derive(Clone, Eq, PartialEq, AsRefln)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl Debug for AccessToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

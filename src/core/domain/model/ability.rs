//! User abilities and permission checks.
//!
//! An ability is a `(name, resource)` grant, written `name:resource`. The name or the
//! resource can be `all`, which matches anything in that position.

use crate::core::domain::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

const WILDCARD: &str = "all";

/// A permission grant held by a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Ability {
    pub name: String,
    pub resource: String,
}

impl Ability {
    pub fn new(name: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource: resource.into(),
        }
    }

    /// Parses the `name:resource` form.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value.split_once(':') {
            Some((name, resource))
                if !name.is_empty() && !resource.is_empty() && !resource.contains(':') =>
            {
                Ok(Self::new(name, resource))
            }
            _ => Err(ValidationError::Format(format!(
                "Ability '{}' must be in format name:resource",
                value
            ))),
        }
    }

    /// True if this grant covers `required`, honoring `all` wildcards.
    #[must_use]
    pub fn grants(&self, required: &Ability) -> bool {
        (self.name == WILDCARD || self.name == required.name)
            && (self.resource == WILDCARD || self.resource == required.resource)
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.resource)
    }
}

/// Checks whether a user holding `abilities` may run something requiring any of
/// the `permitted` grants.
///
/// An empty `permitted` list requires nothing. Malformed entries never match.
#[must_use]
pub fn is_authorized<S: AsRef<str>>(abilities: &[Ability], permitted: &[S]) -> bool {
    if permitted.is_empty() {
        return true;
    }

    permitted
        .iter()
        .filter_map(|entry| Ability::parse(entry.as_ref()).ok())
        .any(|required| abilities.iter().any(|ability| ability.grants(&required)))
}

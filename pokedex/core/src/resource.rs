use serde::Deserialize;

/// A named reference to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Resource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

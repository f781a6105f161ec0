//! Bearer token table for client record routes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Authentication configuration.
///
/// Maps each accepted bearer token to the owner id it authenticates as.
/// With an empty table every client route answers 401.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Token to owner id.
    #[serde(default)]
    pub tokens: HashMap<String, String>,
}

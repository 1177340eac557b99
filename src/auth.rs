// ABOUTME: API key discovery with precedence chain
// ABOUTME: CLI flag → MESH_API_KEY env var → anonymous access

use std::env;

pub const API_KEY_ENV: &str = "MESH_API_KEY";

/// Resolve the API key to send. `None` means anonymous access.
pub fn resolve_api_key(cli_key: Option<String>) -> Option<String> {
    // 1. CLI flag
    if let Some(key) = cli_key.filter(|k| !k.is_empty()) {
        return Some(key);
    }

    // 2. Environment variable
    env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty())
}

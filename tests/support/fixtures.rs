//! Test fixtures and constants.

use serde_json::{json, Value};

/// KV v2 base path used by most tests.
pub const BASE_PATH: &str = "secret/data/terraform";

/// Token passed through `VAULT_TOKEN`.
pub const ENV_TOKEN: &str = "hvs.from-env";

/// Token cached in `~/.vault-token`.
pub const FILE_TOKEN: &str = "hvs.from-file";

/// Terraform Cloud hostname.
pub const TFC_HOST: &str = "app.terraform.io";

/// Terraform API token stored in Vault.
pub const TFC_TOKEN: &str = "abc123.atlasv1.secret";

/// KV v2 read response with the given inner fields.
pub fn kv2_response(fields: Value) -> Value {
    json!({
        "request_id": "9d3e1a7c-0000-0000-0000-000000000000",
        "lease_id": "",
        "renewable": false,
        "lease_duration": 0,
        "data": {
            "data": fields,
            "metadata": {
                "created_time": "2024-05-01T12:00:00Z",
                "deletion_time": "",
                "destroyed": false,
                "version": 3
            }
        },
        "warnings": null
    })
}

/// KV v2 read response holding `token`.
pub fn token_response(token: &str) -> Value {
    kv2_response(json!({ "token": token }))
}

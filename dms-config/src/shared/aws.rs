use secrecy::SecretString;
use serde::Deserialize;

/// Configuration for the AWS DMS control plane session.
///
/// When the static credential pair is absent, the SDK's default credential provider chain
/// (instance profile, web identity, shared config files) is used instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AwsConfig {
    /// Region whose DMS tasks are scraped. Also emitted as the `region` label value.
    pub region: String,
    /// Static access key id, paired with `secret_access_key`.
    pub access_key_id: Option<String>,
    /// Static secret access key. Held as a secret so it is never logged or serialized.
    pub secret_access_key: Option<SecretString>,
}

impl AwsConfig {
    /// Returns true when a full static credential pair is configured.
    pub fn has_static_credentials(&self) -> bool {
        self.access_key_id.is_some() && self.secret_access_key.is_some()
    }
}

use serde::Deserialize;

use crate::shared::application::ApplicationConfig;
use crate::shared::aws::AwsConfig;
use crate::shared::base::ValidationError;

/// Configuration for the exporter service.
///
/// Aggregates everything required to run the exporter: the HTTP surface and the AWS control
/// plane session. The [`ExporterConfig`] is loaded once at startup via
/// [`load_config`](crate::load_config) and passed by reference into the components that need
/// it; no ambient environment lookups happen after startup.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ExporterConfig {
    /// Configuration for the HTTP surface.
    pub application: ApplicationConfig,
    /// Configuration for the AWS DMS control plane session.
    pub aws: AwsConfig,
}

impl ExporterConfig {
    /// Validates the loaded [`ExporterConfig`].
    ///
    /// Checks that the region is usable and that static credentials, when present, form a
    /// complete pair.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.aws.region.is_empty() {
            return Err(ValidationError::MissingRegion);
        }

        if self.aws.access_key_id.is_some() != self.aws.secret_access_key.is_some() {
            return Err(ValidationError::PartialStaticCredentials);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::ExporterConfig;
    use crate::shared::{ApplicationConfig, AwsConfig, ValidationError};

    fn config_with_aws(aws: AwsConfig) -> ExporterConfig {
        ExporterConfig {
            application: ApplicationConfig {
                host: "0.0.0.0".to_owned(),
                port: 8080,
            },
            aws,
        }
    }

    #[test]
    fn config_without_credentials_is_valid() {
        let config = config_with_aws(AwsConfig {
            region: "ap-southeast-1".to_owned(),
            access_key_id: None,
            secret_access_key: None,
        });

        assert!(config.validate().is_ok());
        assert!(!config.aws.has_static_credentials());
    }

    #[test]
    fn config_with_full_credential_pair_is_valid() {
        let config = config_with_aws(AwsConfig {
            region: "ap-southeast-1".to_owned(),
            access_key_id: Some("AKIAEXAMPLE".to_owned()),
            secret_access_key: Some(SecretString::new("shhh".to_owned())),
        });

        assert!(config.validate().is_ok());
        assert!(config.aws.has_static_credentials());
    }

    #[test]
    fn partial_credential_pair_is_rejected() {
        let config = config_with_aws(AwsConfig {
            region: "ap-southeast-1".to_owned(),
            access_key_id: Some("AKIAEXAMPLE".to_owned()),
            secret_access_key: None,
        });

        assert!(matches!(
            config.validate(),
            Err(ValidationError::PartialStaticCredentials)
        ));
    }

    #[test]
    fn empty_region_is_rejected() {
        let config = config_with_aws(AwsConfig {
            region: String::new(),
            access_key_id: None,
            secret_access_key: None,
        });

        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRegion)
        ));
    }
}

use crate::shared::ExporterConfig;

/// Environment variable holding the listen host.
const HOST_ENV_NAME: &str = "HOST";

/// Environment variable holding the listen port.
const PORT_ENV_NAME: &str = "PORT";

/// Environment variable holding the AWS region to query, which is also reported as the
/// `region` label on every emitted metric.
const AWS_REGION_ENV_NAME: &str = "AWS_REGION";

/// Environment variable holding the static AWS access key id.
const AWS_ACCESS_KEY_ID_ENV_NAME: &str = "AWS_ACCESS_KEY_ID";

/// Environment variable holding the static AWS secret access key.
const AWS_SECRET_ACCESS_KEY_ENV_NAME: &str = "AWS_SECRET_ACCESS_KEY";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "8080";
const DEFAULT_AWS_REGION: &str = "ap-southeast-1";

/// Loads the [`ExporterConfig`] from the process environment.
///
/// All settings are read once at startup. Unset variables fall back to the documented
/// defaults; the two credential variables have no default and stay absent unless provided.
/// An empty value is treated the same as an absent one.
pub fn load_config() -> Result<ExporterConfig, config::ConfigError> {
    load_config_with(|name| std::env::var(name).ok())
}

/// Builds the configuration from an arbitrary variable lookup.
///
/// The lookup is injected instead of read from the ambient environment so the merge and
/// coercion rules can be exercised in tests without mutating process-global state.
fn load_config_with(
    env: impl Fn(&str) -> Option<String>,
) -> Result<ExporterConfig, config::ConfigError> {
    let non_empty = |name: &str| env(name).filter(|value| !value.is_empty());

    let settings = config::Config::builder()
        .set_default("application.host", DEFAULT_HOST)?
        .set_default("application.port", DEFAULT_PORT)?
        .set_default("aws.region", DEFAULT_AWS_REGION)?
        .set_override_option("application.host", non_empty(HOST_ENV_NAME))?
        .set_override_option("application.port", non_empty(PORT_ENV_NAME))?
        .set_override_option("aws.region", non_empty(AWS_REGION_ENV_NAME))?
        .set_override_option("aws.access_key_id", non_empty(AWS_ACCESS_KEY_ID_ENV_NAME))?
        .set_override_option(
            "aws.secret_access_key",
            non_empty(AWS_SECRET_ACCESS_KEY_ENV_NAME),
        )?
        .build()?;

    settings.try_deserialize()
}

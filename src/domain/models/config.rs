use std::collections::BTreeMap;
use std::convert::Infallible;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::constraint::{ConstraintKind, Constraints};
use super::field::{FieldValue, Inspect};
use super::schema::{Configuration, Schema};

/// Reference service configuration validated by the `yamlcfg` binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name, must not be blank
    pub name: Option<String>,

    /// Hosts the service binds to, at least one
    pub hosts: Option<Vec<String>>,

    /// Request timeout in seconds, must be set
    pub timeout_secs: Option<u64>,

    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,

    /// TLS settings, validated separately when present
    #[serde(default)]
    pub tls: Option<TlsConfig>,

    /// Arbitrary labels
    #[serde(default)]
    pub labels: BTreeMap<String, String>,

    /// Operator contact, only reachable through [`ServiceConfig::admin_email`]
    #[serde(default)]
    admin_email: Option<String>,
}

impl ServiceConfig {
    /// Minimal configuration with the given name and hosts
    pub fn new(name: impl Into<String>, hosts: Vec<String>, timeout_secs: u64) -> Self {
        Self {
            name: Some(name.into()),
            hosts: Some(hosts),
            timeout_secs: Some(timeout_secs),
            description: None,
            tls: None,
            labels: BTreeMap::new(),
            admin_email: None,
        }
    }

    /// Set the operator contact
    #[must_use]
    pub fn with_admin_email(mut self, email: impl Into<String>) -> Self {
        self.admin_email = Some(email.into());
        self
    }

    /// Operator contact address
    pub fn admin_email(&self) -> Option<&str> {
        self.admin_email.as_deref()
    }
}

impl Configuration for ServiceConfig {
    fn schema() -> Schema<Self> {
        Schema::builder()
            .field("name", Constraints::NOT_BLANK, |c: &Self| &c.name)
            .field("hosts", Constraints::NOT_EMPTY, |c: &Self| &c.hosts)
            .field("timeout_secs", Constraints::REQUIRED, |c: &Self| &c.timeout_secs)
            .field("description", Constraints::NONE, |c: &Self| &c.description)
            .field("tls", Constraints::NONE, |c: &Self| &c.tls)
            .field("labels", Constraints::NONE, |c: &Self| &c.labels)
            .accessor(
                "admin_email",
                [ConstraintKind::RequiredPresence, ConstraintKind::RequiredNonBlankText],
                |c: &Self| Ok::<_, Infallible>(c.admin_email().map(str::to_owned)),
            )
            .build()
    }
}

/// TLS settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TlsConfig {
    /// Certificate chain path
    pub cert_path: Option<PathBuf>,

    /// Private key path
    pub key_path: Option<PathBuf>,

    /// Accepted ALPN protocols
    #[serde(default = "default_alpn")]
    pub alpn: Vec<String>,
}

fn default_alpn() -> Vec<String> {
    vec!["h2".to_string(), "http/1.1".to_string()]
}

impl Inspect for TlsConfig {
    fn inspect(&self) -> FieldValue {
        FieldValue::Other("object")
    }
}

impl Configuration for TlsConfig {
    fn schema() -> Schema<Self> {
        Schema::builder()
            .field("cert_path", Constraints::REQUIRED, |c: &Self| &c.cert_path)
            .field("key_path", Constraints::REQUIRED, |c: &Self| &c.key_path)
            .field("alpn", Constraints::NOT_EMPTY, |c: &Self| &c.alpn)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_parsing() {
        let yaml = r"
name: billing
hosts:
  - 10.0.0.1
  - 10.0.0.2
timeout_secs: 30
labels:
  team: payments
tls:
  cert_path: /etc/billing/cert.pem
  key_path: /etc/billing/key.pem
admin_email: ops@example.com
";

        let config: ServiceConfig = serde_yaml::from_str(yaml).expect("YAML should parse");

        assert_eq!(config.name.as_deref(), Some("billing"));
        assert_eq!(config.hosts.as_ref().map(Vec::len), Some(2));
        assert_eq!(config.timeout_secs, Some(30));
        assert_eq!(config.labels["team"], "payments");
        let tls = config.tls.as_ref().expect("tls section");
        assert_eq!(tls.alpn, default_alpn());
        assert_eq!(config.admin_email(), Some("ops@example.com"));
    }

    #[test]
    fn test_schema_declares_expected_fields() {
        let schema = ServiceConfig::schema();
        assert_eq!(schema.owner(), "ServiceConfig");
        let constrained: Vec<_> = schema.constrained_fields().map(|f| f.name()).collect();
        assert_eq!(constrained, ["name", "hosts", "timeout_secs", "admin_email"]);
    }

    #[test]
    fn test_missing_name_and_hosts_deserialize_as_absent() {
        let config: ServiceConfig =
            serde_yaml::from_str("name: ~\ntimeout_secs: 5\n").expect("YAML should parse");
        assert!(config.name.is_none());
        assert!(config.hosts.is_none());
    }

    #[test]
    fn test_admin_email_is_read_not_judged() {
        let config = ServiceConfig::new("svc", vec!["a".into()], 5).with_admin_email("nobody");
        assert_eq!(config.admin_email(), Some("nobody"));
        assert!(crate::Validator::check(&config).is_ok());
    }
}

//! End-to-end tests: YAML document on disk -> typed, validated configuration.

mod common;

use common::documents;
use yamlcfg::domain::models::{ServiceConfig, TlsConfig};
use yamlcfg::{
    load_and_validate, ConfigError, ConfigLoader, Configuration, Constraints, Schema,
    ValidationError, Validator,
};

#[test]
fn test_valid_document_loads() {
    common::setup_test_logging();
    let (_dir, path) = common::write_document(documents::VALID);

    let config: ServiceConfig = load_and_validate(&path).expect("document should be valid");

    assert_eq!(config.name.as_deref(), Some("billing"));
    assert_eq!(
        config.hosts,
        Some(vec!["10.0.0.1".to_string(), "10.0.0.2".to_string()])
    );
    assert_eq!(config.timeout_secs, Some(30));
    assert_eq!(config.description.as_deref(), Some("Billing API"));
    assert_eq!(config.admin_email(), Some("ops@example.com"));
}

#[test]
fn test_blank_name_is_emptiness_violation() {
    let (_dir, path) = common::write_document(documents::BLANK_NAME);

    let err = load_and_validate::<ServiceConfig>(&path).unwrap_err();

    match err.violation() {
        Some(ValidationError::Emptiness { field, owner, .. }) => {
            assert_eq!(field, "name");
            assert_eq!(owner, "ServiceConfig");
        }
        other => panic!("Expected emptiness violation, got {other:?}"),
    }
    assert!(err.to_string().contains("name in ServiceConfig must not be blank"));
}

#[test]
fn test_empty_hosts_is_emptiness_violation() {
    let (_dir, path) = common::write_document(documents::EMPTY_HOSTS);

    let err = load_and_validate::<ServiceConfig>(&path).unwrap_err();

    assert!(matches!(
        err.violation(),
        Some(ValidationError::Emptiness { field, .. }) if field == "hosts"
    ));
}

#[test]
fn test_missing_timeout_is_presence_violation() {
    let (_dir, path) = common::write_document(documents::MISSING_TIMEOUT);

    let err = load_and_validate::<ServiceConfig>(&path).unwrap_err();

    assert!(matches!(
        err.violation(),
        Some(ValidationError::Presence { field, .. }) if field == "timeout_secs"
    ));
}

#[test]
fn test_missing_file_names_path() {
    let dir = common::temp_dir();
    let path = dir.path().join("nowhere.yaml");

    let err = load_and_validate::<ServiceConfig>(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains(&path.display().to_string()));
}

#[test]
fn test_malformed_yaml_is_parse_error() {
    let (_dir, path) = common::write_document("name: [unterminated\n");

    let err = load_and_validate::<ServiceConfig>(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), path);
}

#[test]
fn test_missing_name_is_presence_violation() {
    let (_dir, path) = common::write_document(documents::MISSING_NAME);

    let err = load_and_validate::<ServiceConfig>(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Invalid { .. }));
    assert_eq!(
        err.violation().map(ToString::to_string),
        Some("name in ServiceConfig must not be undefined".to_string())
    );
}

#[test]
fn test_null_name_is_presence_violation() {
    let doc = documents::VALID.replace("name: billing", "name: ~");
    let (_dir, path) = common::write_document(&doc);

    let err = load_and_validate::<ServiceConfig>(&path).unwrap_err();

    assert!(matches!(
        err.violation(),
        Some(ValidationError::Presence { field, .. }) if field == "name"
    ));
}

#[test]
fn test_missing_hosts_is_presence_violation() {
    let (_dir, path) = common::write_document(documents::MISSING_HOSTS);

    let err = load_and_validate::<ServiceConfig>(&path).unwrap_err();

    assert_eq!(
        err.violation().map(ToString::to_string),
        Some("hosts in ServiceConfig must not be undefined".to_string())
    );
}

#[test]
fn test_unusual_admin_email_is_not_schema_defect() {
    let doc = documents::VALID.replace("ops@example.com", "nobody");
    let (_dir, path) = common::write_document(&doc);

    let config: ServiceConfig = load_and_validate(&path).expect("any non-blank contact is accepted");
    assert_eq!(config.admin_email(), Some("nobody"));
}

/// Same document shape as `ServiceConfig`, but the contact field was declared
/// without a reader.
#[derive(Debug, serde::Deserialize)]
struct UnreadableContact {
    name: Option<String>,
}

impl Configuration for UnreadableContact {
    fn schema() -> Schema<Self> {
        Schema::builder()
            .field("name", Constraints::NOT_BLANK, |c: &Self| &c.name)
            .declare("admin_email", Constraints::NOT_BLANK)
            .build()
    }
}

#[test]
fn test_field_without_reader_is_schema_defect() {
    let (_dir, path) = common::write_document(documents::VALID);

    let err = load_and_validate::<UnreadableContact>(&path).unwrap_err();
    let violation = err.violation().expect("validation failure");

    assert!(violation.is_schema_defect());
    assert_eq!(violation.field(), "admin_email");
    assert_eq!(
        violation.to_string(),
        "Field 'admin_email' on 'UnreadableContact' does not have an accessor"
    );
}

#[test]
fn test_env_prefix_fills_missing_key() {
    let (_dir, path) = common::write_document(documents::MISSING_TIMEOUT);

    temp_env::with_vars([("YAMLCFG_IT_TIMEOUT_SECS", Some("90"))], || {
        let config: ServiceConfig = ConfigLoader::new()
            .with_env_prefix("YAMLCFG_IT_")
            .load(&path)
            .expect("env should supply timeout");
        assert_eq!(config.timeout_secs, Some(90));
    });
}

#[test]
fn test_nested_objects_are_validated_separately() {
    let doc = format!("{}tls:\n  cert_path: /etc/cert.pem\n", documents::VALID);
    let (_dir, path) = common::write_document(&doc);

    // The outer document is valid even though its tls section is not.
    let config: ServiceConfig = load_and_validate(&path).expect("outer config is valid");
    let tls: TlsConfig = config.tls.expect("tls section");

    let err = Validator::validate(tls).unwrap_err();
    assert_eq!(err.field(), "key_path");
    assert_eq!(err.owner(), "TlsConfig");
}

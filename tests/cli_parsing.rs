use clap::Parser;
use std::path::PathBuf;
use yamlcfg::cli::{Cli, Commands};
use yamlcfg::infrastructure::logging::{LogFormat, RotationPolicy};

#[test]
fn test_parse_check() {
    let cli = Cli::try_parse_from(["yamlcfg", "check", "service.yaml"]).unwrap();

    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.file, PathBuf::from("service.yaml"));
            assert!(!args.all);
            assert!(args.env_prefix.is_none());
        }
        Commands::Schema => panic!("Wrong command"),
    }
    assert!(!cli.json);
    assert_eq!(cli.log_format, LogFormat::Compact);
}

#[test]
fn test_parse_check_with_flags() {
    let cli = Cli::try_parse_from([
        "yamlcfg",
        "check",
        "service.yaml",
        "--all",
        "--env-prefix",
        "SERVICE_",
        "--json",
        "--log-format",
        "json",
    ])
    .unwrap();

    match cli.command {
        Commands::Check(args) => {
            assert!(args.all);
            assert_eq!(args.env_prefix.as_deref(), Some("SERVICE_"));
        }
        Commands::Schema => panic!("Wrong command"),
    }
    assert!(cli.json);
    assert_eq!(cli.log_format, LogFormat::Json);
}

#[test]
fn test_parse_schema() {
    let cli = Cli::try_parse_from(["yamlcfg", "--log-level", "debug", "schema"]).unwrap();
    assert!(matches!(cli.command, Commands::Schema));
    assert_eq!(cli.log_level, "debug");
}

#[test]
fn test_check_requires_file() {
    assert!(Cli::try_parse_from(["yamlcfg", "check"]).is_err());
}

#[test]
fn test_rejects_unknown_log_format() {
    assert!(Cli::try_parse_from(["yamlcfg", "--log-format", "xml", "schema"]).is_err());
}

#[test]
fn test_log_file_flags_reach_log_config() {
    let cli = Cli::try_parse_from([
        "yamlcfg",
        "schema",
        "--log-dir",
        "/var/log/yamlcfg",
        "--log-rotation",
        "never",
    ])
    .unwrap();

    let config = cli.log_config();
    assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/yamlcfg")));
    assert_eq!(config.rotation, RotationPolicy::Never);
    assert_eq!(config.level, "warn");
}

#[test]
fn test_log_file_disabled_by_default() {
    temp_env::with_var_unset("YAMLCFG_LOG_DIR", || {
        let cli = Cli::try_parse_from(["yamlcfg", "schema"]).unwrap();
        let config = cli.log_config();
        assert!(config.log_dir.is_none());
        assert_eq!(config.rotation, RotationPolicy::Daily);
    });
}

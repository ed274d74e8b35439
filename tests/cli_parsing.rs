use clap::Parser;
use scm_insights::cli::{Cli, Commands};

#[test]
fn test_parse_run_with_catalog_file() {
    let cli = Cli::try_parse_from(["scm-insights", "run", "--catalog-file", "catalog.yaml"]).unwrap();
    assert!(!cli.json);
    match cli.command {
        Commands::Run { catalog_file } => {
            assert_eq!(catalog_file.unwrap().to_str(), Some("catalog.yaml"));
        }
        _ => panic!("expected run command"),
    }
}

#[test]
fn test_parse_check_with_global_flags() {
    let cli = Cli::try_parse_from([
        "scm-insights",
        "check",
        "component:default/backstage",
        "--json",
        "--config",
        "custom.yaml",
    ])
    .unwrap();
    assert!(cli.json);
    assert_eq!(cli.config.unwrap().to_str(), Some("custom.yaml"));
    match cli.command {
        Commands::Check { entity_ref, .. } => assert_eq!(entity_ref, "component:default/backstage"),
        _ => panic!("expected check command"),
    }
}

#[test]
fn test_parse_init_force() {
    let cli = Cli::try_parse_from(["scm-insights", "init", "--force"]).unwrap();
    assert!(matches!(cli.command, Commands::Init { force: true }));
}

#[test]
fn test_check_requires_entity_ref() {
    assert!(Cli::try_parse_from(["scm-insights", "check"]).is_err());
}

use super::*;

#[test]
fn parses_plain_run() {
    let cli = Cli::try_parse_from(["feedsync", "run"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Run {
            feed: None,
            profile: None,
            dry_run: false
        }
    ));
}

#[test]
fn parses_run_with_overrides() {
    let cli = Cli::try_parse_from([
        "feedsync",
        "run",
        "--feed",
        "csv-input/other.csv",
        "--profile",
        "config/per-row.yaml",
        "--dry-run",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Run {
            feed,
            profile,
            dry_run,
        } => {
            assert_eq!(feed, Some(PathBuf::from("csv-input/other.csv")));
            assert_eq!(profile, Some(PathBuf::from("config/per-row.yaml")));
            assert!(dry_run);
        }
    }
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["feedsync"]).is_err());
}

#[test]
fn unknown_flag_is_rejected() {
    assert!(Cli::try_parse_from(["feedsync", "run", "--brand", "ajax"]).is_err());
}

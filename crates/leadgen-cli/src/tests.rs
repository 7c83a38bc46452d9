use super::*;

#[test]
fn command_is_required() {
    assert!(Cli::try_parse_from(["leadgen"]).is_err());
}

#[test]
fn parses_explore_defaults() {
    let cli = Cli::try_parse_from(["leadgen", "explore"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Explore {
            page: 1,
            page_size: None,
            ..
        }
    ));
}

#[test]
fn parses_explore_with_filters_and_paging() {
    let cli = Cli::try_parse_from([
        "leadgen",
        "explore",
        "--file",
        "leads.csv",
        "--category",
        "Restaurant",
        "--has-phone",
        "--min-rating",
        "4",
        "--page",
        "3",
        "--page-size",
        "20",
        "--dedupe",
    ])
    .unwrap();

    let Commands::Explore {
        source,
        filter,
        page,
        page_size,
    } = cli.command
    else {
        panic!("expected explore command");
    };
    assert_eq!(source.file, Some(PathBuf::from("leads.csv")));
    assert!(source.dedupe);
    assert_eq!(page, 3);
    assert_eq!(page_size, Some(20));

    let filter = LeadFilter::from(filter);
    assert_eq!(filter.category.as_deref(), Some("Restaurant"));
    assert!(filter.has_phone);
    assert!(!filter.has_email);
    assert_eq!(filter.min_rating, Some(4.0));
}

#[test]
fn file_and_url_conflict() {
    let result = Cli::try_parse_from([
        "leadgen",
        "stats",
        "--file",
        "leads.json",
        "--url",
        "https://leads.example.fr",
    ]);
    assert!(result.is_err());
}

#[test]
fn parses_export_format_and_output() {
    let cli = Cli::try_parse_from([
        "leadgen",
        "export",
        "--format",
        "json",
        "--output",
        "out.json",
        "--region",
        "Île-de-France",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Export {
            format: ExportFormat::Json,
            output: Some(ref p),
            ref filter,
            ..
        } if p == &PathBuf::from("out.json") && filter.region.as_deref() == Some("Île-de-France")
    ));
}

#[test]
fn export_defaults_to_csv() {
    let cli = Cli::try_parse_from(["leadgen", "export"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Export {
            format: ExportFormat::Csv,
            output: None,
            ..
        }
    ));
}

#[test]
fn parses_values_field() {
    let cli = Cli::try_parse_from(["leadgen", "values", "--field", "department"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Values {
            field: ValueField::Department,
            ..
        }
    ));
    assert_eq!(LeadField::from(ValueField::Department), LeadField::Department);
}

#[test]
fn values_requires_field() {
    assert!(Cli::try_parse_from(["leadgen", "values"]).is_err());
}

#[test]
fn parses_stats_with_url() {
    let cli =
        Cli::try_parse_from(["leadgen", "stats", "--url", "https://leads.example.fr"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Stats { ref source, .. } if source.url.as_deref() == Some("https://leads.example.fr")
    ));
}

use super::*;
use trendscope_search::Timeframe;

#[test]
fn search_defaults() {
    let cli = Cli::try_parse_from(["trendscope", "search"]).expect("expected valid cli args");
    let Commands::Search(args) = cli.command else {
        panic!("expected search command");
    };
    assert_eq!(args.keywords, "fashion, style");
    assert_eq!(args.timeframe, Timeframe::Monthly);
    assert_eq!(args.rows, 10);
    assert!(args.geo.is_none());
    assert!(!args.raw);
    assert!(args.csv.is_none());
}

#[test]
fn search_with_options() {
    let cli = Cli::try_parse_from([
        "trendscope",
        "search",
        "--keywords",
        "boots,sneakers",
        "--timeframe",
        "all time",
        "--geo",
        "GB",
        "--raw",
        "--rows",
        "5",
        "--csv",
        "out.csv",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Search(search::SearchArgs {
            timeframe: Timeframe::AllTime,
            raw: true,
            rows: 5,
            geo: Some(ref g),
            csv: Some(_),
            ..
        }) if g == "GB"
    ));
}

#[test]
fn unknown_timeframe_is_rejected() {
    let result = Cli::try_parse_from(["trendscope", "search", "--timeframe", "weekly"]);
    assert!(result.is_err());
}

#[test]
fn social_defaults_to_worldwide_top_ten() {
    let cli = Cli::try_parse_from(["trendscope", "social"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Social(social::SocialArgs { ref location, top: 10, csv: None }) if location == "Worldwide"
    ));
}

#[test]
fn social_accepts_location_and_top() {
    let cli = Cli::try_parse_from([
        "trendscope",
        "social",
        "--location",
        "23424977",
        "--top",
        "3",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Social(social::SocialArgs { ref location, top: 3, .. }) if location == "23424977"
    ));
}

#[test]
fn missing_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["trendscope"]).is_err());
}

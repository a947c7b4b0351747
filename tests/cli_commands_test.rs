use semanver::cli::commands::{
    compare_command, latest_command, parse_command, sort_command, CommandContext, Relation,
};
use semanver::config::{Config, ParsingConfig};
use semanver::{SemanVerError, Shape};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn standard() -> CommandContext {
    CommandContext::from_config(&Config::default(), false).unwrap()
}

fn revision() -> CommandContext {
    CommandContext::from_config(&Config::default(), true).unwrap()
}

#[test]
fn test_parse_command_reads_back_fields() {
    let report = parse_command("1.0.0-alpha1+234F234D", &standard()).unwrap();
    assert_eq!(report.version.shape(), Shape::Standard);
    assert_eq!(report.version.numeric_core(), &[1, 0, 0]);
    assert_eq!(report.version.pre_release(), "alpha1");
    assert_eq!(report.version.build_metadata(), "234F234D");
}

#[test]
fn test_parse_command_revision_shape() {
    let report = parse_command("v1.0.0.5", &revision()).unwrap();
    assert_eq!(report.version.numeric_core(), &[1, 0, 0, 5]);
}

#[test]
fn test_parse_command_propagates_parse_error() {
    let err = parse_command("1.0.0.5", &standard()).unwrap_err();
    assert!(matches!(
        err,
        SemanVerError::InvalidFormat {
            expected: 3,
            found: 4,
            ..
        }
    ));
}

#[test]
fn test_custom_tag_patterns() {
    let config = Config {
        parsing: ParsingConfig {
            shape: Shape::Standard,
            tag_patterns: vec!["release-{version}".to_string()],
        },
        ..Config::default()
    };
    let ctx = CommandContext::from_config(&config, false).unwrap();

    let report = parse_command("release-2.1.0", &ctx).unwrap();
    assert_eq!(report.version.numeric_core(), &[2, 1, 0]);

    // "v" is no longer a configured prefix
    assert!(parse_command("v2.1.0", &ctx).is_err());
}

#[test]
fn test_invalid_tag_pattern_rejected() {
    let config = Config {
        parsing: ParsingConfig {
            shape: Shape::Standard,
            tag_patterns: vec!["no-placeholder".to_string()],
        },
        ..Config::default()
    };
    let err = CommandContext::from_config(&config, false).unwrap_err();
    assert!(matches!(err, SemanVerError::Tag(_)));
}

#[test]
fn test_compare_command_revision() {
    let ctx = revision();
    let comparison = compare_command("1.0.1.0", "1.0.0.5", &ctx).unwrap();
    assert_eq!(comparison.relation, Relation::Newer);

    let comparison = compare_command("1.0.0.5-alpha1", "1.0.0.5", &ctx).unwrap();
    assert_eq!(comparison.relation, Relation::Older);

    let comparison = compare_command("1.0.0.5+234F234D", "1.0.0.5", &ctx).unwrap();
    assert_eq!(comparison.relation, Relation::OrderedEqual);
}

#[test]
fn test_sort_command_fails_on_any_bad_input() {
    let err = sort_command(&strings(&["1.0.0", "oops", "0.1.0"]), false, &standard()).unwrap_err();
    assert!(err.is_parse_error());
}

#[test]
fn test_sort_command_orders_numerically() {
    let sorted = sort_command(
        &strings(&["1.10.0", "v1.9.0", "1.0.0-rc1", "1.0.0"]),
        false,
        &standard(),
    )
    .unwrap();
    let rendered: Vec<String> = sorted.iter().map(|v| v.to_string()).collect();
    assert_eq!(rendered, vec!["1.0.0-rc1", "1.0.0", "1.9.0", "1.10.0"]);
}

#[test]
fn test_latest_command() {
    let newest = latest_command(&strings(&["1.0.0-rc1", "0.9.9", "1.0.0-rc2"]), &standard())
        .unwrap()
        .unwrap();
    assert_eq!(newest.to_string(), "1.0.0-rc1");

    let newest = latest_command(&strings(&["1.0.0.5", "1.0.0.12"]), &revision())
        .unwrap()
        .unwrap();
    assert_eq!(newest.to_string(), "1.0.0.12");
}

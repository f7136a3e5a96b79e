//! Batch formatting tests

use cidfmt::engine::BatchSummary;
use cidfmt::{CidError, Engine, EngineConfig, ResolveOptions};
use pretty_assertions::assert_eq;

const LEGACY: &str = "QmUNLLsPACCz1vLxQVkXqqLX5R1X345qqfHbsf67hvA3Nn";
const RAW_BASE32: &str = "bafkreiczsscdsbs7ffqz55asqdf3smv6klcw3gofszvwlyarci47bgf354";

#[test]
fn test_batch_over_lines() {
    let engine = Engine::with_defaults();
    let input = format!("{}\n\n  {}  \n#nope\n", LEGACY, RAW_BASE32);

    let records: Vec<_> = engine
        .format_batch(Some("%P"), &ResolveOptions::default(), input.lines())
        .unwrap()
        .collect();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].formatted.as_deref(), Some("cidv0-dag-pb-sha2-256-32"));
    assert_eq!(records[1].input, RAW_BASE32);
    assert_eq!(records[1].formatted.as_deref(), Some("cidv1-raw-sha2-256-32"));
    assert_eq!(records[2].formatted, None);
    assert_eq!(
        records[2].error.as_deref(),
        Some("Unknown multibase prefix: '#'")
    );

    let summary = BatchSummary::from_records(&records);
    assert_eq!(summary.succeeded, 2);
    assert_eq!(summary.failed, 1);
}

#[test]
fn test_downgrade_failure_is_per_line() {
    let engine = Engine::with_defaults();
    let options = ResolveOptions::new().with_version(0);

    let records: Vec<_> = engine
        .format_batch(None, &options, [RAW_BASE32, LEGACY])
        .unwrap()
        .collect();

    assert!(!records[0].is_ok());
    assert!(records[0].error.as_ref().unwrap().starts_with("Cannot convert to CIDv0"));
    assert_eq!(records[1].formatted.as_deref(), Some(LEGACY));
}

#[test]
fn test_configured_default_template() {
    let config = EngineConfig {
        default_format: Some("%h:%L".to_string()),
        ..Default::default()
    };
    let engine = Engine::from_config(config).unwrap();

    let mut batch = engine
        .format_batch(None, &ResolveOptions::default(), vec![LEGACY.to_string()])
        .unwrap();
    assert_eq!(batch.template().as_str(), "%h:%L");
    assert_eq!(batch.next().unwrap().formatted.as_deref(), Some("sha2-256:32"));
    assert!(batch.next().is_none());
}

#[test]
fn test_template_errors_abort_before_any_input() {
    let engine = Engine::with_defaults();
    for template in ["plain", "%s %q", "%s %"] {
        let err = engine
            .format_batch(Some(template), &ResolveOptions::default(), [LEGACY])
            .err()
            .unwrap();
        assert!(err.is_template_error(), "{} gave {}", template, err);
    }
    assert!(matches!(
        engine.format_batch(Some("%"), &ResolveOptions::default(), [LEGACY]).err(),
        Some(CidError::PrematureEndOfFormatString)
    ));
}

#[test]
fn test_consumer_may_stop_early() {
    let engine = Engine::with_defaults();
    let endless = std::iter::repeat(LEGACY);
    let first: Vec<_> = engine
        .format_batch(None, &ResolveOptions::default(), endless)
        .unwrap()
        .take(3)
        .collect();
    assert_eq!(first.len(), 3);
}

#[test]
fn test_records_serialize_with_original_field_names() {
    let engine = Engine::with_defaults();
    let records: Vec<_> = engine
        .format_batch(Some("%c"), &ResolveOptions::default(), [LEGACY])
        .unwrap()
        .collect();

    let json = serde_json::to_string(&records).unwrap();
    assert_eq!(
        json,
        format!(
            r#"[{{"CidStr":"{}","Formatted":"dag-pb","ErrorMsg":null}}]"#,
            LEGACY
        )
    );
}

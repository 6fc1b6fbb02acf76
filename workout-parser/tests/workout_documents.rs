//! End to end parsing of whole workout documents

use rstest::rstest;
use workout_parser::workout::ast::{
    DiagnosticKind, DiagnosticSeverity, Duration, IntensityClass, Metric, TargetBasis,
    TotalDuration,
};
use workout_parser::workout::testing::assert_workout;
use workout_parser::workout::ParseError;
use workout_parser::{parse, parse_with_options, ParseOptions, Sport};

const OPENER: &str = "\
# Opener Workout (Day Before Race)
- 10m z1-z2
3x
- 1m z4
- 2m z1

- 10m z1
";

#[test]
fn test_opener_workout() {
    let output = parse(OPENER, Sport::Bike).unwrap();

    assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics);
    assert_workout(&output.document)
        .title("Opener Workout (Day Before Race)")
        .incomplete(false)
        .node_count(3)
        .node(0, |node| {
            node.assert_step()
                .seconds(600)
                .zones(1, 2)
                .metric(Metric::Power)
                .ramp(false);
        })
        .node(1, |node| {
            node.assert_repeat()
                .count(3)
                .body_len(2)
                .step(0, |step| step.seconds(60).zone(4))
                .step(1, |step| step.seconds(120).zone(1));
        })
        .node(2, |node| {
            node.assert_step().seconds(600).zone(1);
        })
        .step_count(4)
        .repetition_count(8)
        .total_seconds(1740);
}

#[test]
fn test_cooldown_without_separator_joins_the_repeat() {
    let source = OPENER.replace("\n\n", "\n");
    let output = parse(&source, Sport::Bike).unwrap();

    assert_workout(&output.document)
        .node_count(2)
        .node(1, |node| {
            node.assert_repeat().count(3).body_len(3);
        })
        .total_seconds(600 + 3 * (60 + 120 + 600));
}

#[test]
fn test_empty_repeat_keeps_earlier_steps() {
    let source = "# Broken\n- 10m z2\n- 5m z3\n4x\n\n- 5m z1\n";
    let output = parse(source, Sport::Bike).unwrap();

    assert!(output.has_errors());
    let errors: Vec<_> = output.errors().collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, DiagnosticKind::Structural);
    assert_eq!(errors[0].line, 4);

    assert_workout(&output.document)
        .incomplete(true)
        .node_count(3)
        .node(0, |node| {
            node.assert_step().seconds(600).zone(2);
        })
        .node(1, |node| {
            node.assert_step().seconds(300).zone(3);
        });
}

#[test]
fn test_repeat_header_at_end_of_input() {
    let output = parse("- 10m z2\n2x", Sport::Run).unwrap();
    assert!(output.document.is_incomplete());
    assert_eq!(output.document.step_count(), 1);
}

#[test]
fn test_malformed_lines_are_dropped_in_line_order() {
    let source = "\
- 10m z2
- 10 z3
Warm up well
- 5m z9
- 5m z1 z2
3x
- 1m z4
";
    let output = parse(source, Sport::Bike).unwrap();
    let report: Vec<_> = output
        .diagnostics
        .iter()
        .map(|d| (d.line, d.kind))
        .collect();
    assert_eq!(
        report,
        vec![
            (2, DiagnosticKind::Lexical),
            (3, DiagnosticKind::Classification),
            (4, DiagnosticKind::Resolution),
            (5, DiagnosticKind::Resolution),
        ]
    );
    assert_workout(&output.document)
        .incomplete(false)
        .node_count(2)
        .step_count(2);
}

#[test]
fn test_diagnostic_display() {
    let output = parse("- 5min z2\n- 5m\n", Sport::Bike).unwrap();
    let rendered: Vec<String> = output.diagnostics.iter().map(|d| d.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "line 1:3: error[lexical]: unrecognized token `5min`".to_string(),
            "line 2: error[resolution]: step missing intensity".to_string(),
        ]
    );
}

#[test]
fn test_title_notes_and_warnings() {
    let source = "\
# Tempo Run
> Notes: Run by feel
- 15m z2
# Duplicate
> Fuel at the halfway mark
";
    let output = parse(source, Sport::Run).unwrap();
    assert!(!output.has_errors());
    let warnings: Vec<_> = output.warnings().collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].severity, DiagnosticSeverity::Warning);
    assert_eq!(warnings[0].line, 4);
    assert_workout(&output.document)
        .title("Tempo Run")
        .notes(&["Run by feel", "Fuel at the halfway mark"]);
}

#[rstest]
#[case(Sport::Bike, Metric::Power)]
#[case(Sport::Run, Metric::Pace)]
#[case(Sport::Swim, Metric::Pace)]
fn test_same_text_differs_by_sport(#[case] sport: Sport, #[case] metric: Metric) {
    let output = parse("- 5m 80-85%\n", sport).unwrap();
    assert_workout(&output.document).node(0, |node| {
        node.assert_step().percent("80", "85").metric(metric).ramp(false);
    });
}

#[test]
fn test_swim_distances() {
    let source = "\
# Swim Intervals
- 0.4km z2 Warm up
4x
- 100mtr z4 Hard
- 0.025km 0% Pace Rest

- 200mtr z1
";
    let output = parse(source, Sport::Swim).unwrap();
    assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics);
    assert_workout(&output.document)
        .node(0, |node| {
            node.assert_step().meters("400").label("Warm up");
        })
        .node(1, |node| {
            node.assert_repeat()
                .count(4)
                .step(1, |step| step.meters("25").percent("0", "0").label("Rest"));
        })
        .total_meters("1100");
}

#[test]
fn test_mixed_durations_report_both_totals() {
    let output = parse("- 10m z2\n- 1km z3\n", Sport::Run).unwrap();
    assert_eq!(
        output.document.total_duration(),
        TotalDuration::Mixed {
            seconds: 600,
            meters: "1000".parse().unwrap(),
        }
    );
}

#[rstest]
#[case(Sport::Bike, TotalDuration::Time { seconds: 0 })]
#[case(Sport::Swim, TotalDuration::Distance { meters: Default::default() })]
fn test_empty_document(#[case] sport: Sport, #[case] total: TotalDuration) {
    let output = parse("", sport).unwrap();
    assert!(output.diagnostics.is_empty());
    assert_workout(&output.document)
        .no_title()
        .node_count(0)
        .incomplete(false)
        .total(total);
}

#[test]
fn test_supplemental_step_tokens() {
    let source = "3x Sprints\n- 15s 600W maxeffort 110rpm intensity=interval\n- 45s z1 freeride\n";
    let output = parse(source, Sport::Bike).unwrap();
    assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics);
    assert_workout(&output.document).node(0, |node| {
        node.assert_repeat()
            .label("Sprints")
            .step(0, |step| {
                step.watts(600, 600)
                    .max_effort(true)
                    .cadence(110, 110)
                    .intensity(IntensityClass::Interval)
            })
            .step(1, |step| step.freeride(true).max_effort(false));
    });
}

#[test]
fn test_hidden_power_and_target_basis() {
    let source = "- 10m 80% hidepower\n- 10m 80% ftp\n- 5m 95-105% MMP Surge\n- 20m 85% LTHR\n";
    let output = parse(source, Sport::Run).unwrap();
    assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics);
    assert_workout(&output.document)
        .node(0, |node| {
            node.assert_step()
                .hide_power(true)
                .metric(Metric::Pace)
                .no_label();
        })
        .node(1, |node| {
            node.assert_step()
                .basis(TargetBasis::Ftp)
                .metric(Metric::Power)
                .hide_power(false)
                .no_label();
        })
        .node(2, |node| {
            node.assert_step()
                .basis(TargetBasis::Mmp)
                .metric(Metric::Power)
                .label("Surge");
        })
        .node(3, |node| {
            node.assert_step()
                .basis(TargetBasis::Lthr)
                .metric(Metric::HeartRate);
        });
}

#[test]
fn test_huge_repeat_count_stays_cheap() {
    let output = parse("4000000000x\n- 1s z1\n", Sport::Bike).unwrap();
    assert!(output.diagnostics.is_empty());
    let document = &output.document;
    assert_eq!(document.step_count(), 1);
    assert_eq!(document.repetition_count(), 4_000_000_000);
    assert_eq!(
        document.total_duration(),
        TotalDuration::Time {
            seconds: 4_000_000_000
        }
    );
    let first: Vec<_> = document.timeline().take(5).map(|step| step.duration).collect();
    assert_eq!(first, vec![Duration::seconds(1); 5]);
}

#[test]
fn test_bare_title_marker_leaves_the_title_open() {
    let output = parse("#\n- 5m z2\n# Real title\n", Sport::Bike).unwrap();
    assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics);
    assert_workout(&output.document).title("Real title").step_count(1);

    let output = parse("#\n- 5m z2\n", Sport::Bike).unwrap();
    assert_workout(&output.document).no_title();
}

#[test]
fn test_oversized_zone_is_a_resolution_error() {
    let output = parse("- 5m z99999999999\n", Sport::Bike).unwrap();
    let errors: Vec<_> = output.errors().collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, DiagnosticKind::Resolution);
    assert_eq!(
        errors[0].message,
        "zone z4294967295 is out of range (z1-z7)"
    );
}

#[test]
fn test_heart_rate_targets() {
    let output = parse("- 20m z2 HR Aerobic\n", Sport::Run).unwrap();
    assert_workout(&output.document).node(0, |node| {
        node.assert_step()
            .metric(Metric::HeartRate)
            .label("Aerobic");
    });
}

#[test]
fn test_limits_are_enforced() {
    let options = ParseOptions {
        max_bytes: 8,
        ..ParseOptions::new(Sport::Bike)
    };
    assert_eq!(
        parse_with_options("- 10m z1-z2\n", &options),
        Err(ParseError::InputTooLarge {
            measure: "bytes",
            actual: 12,
            limit: 8,
        })
    );
}

#[test]
fn test_parsing_is_idempotent() {
    assert_eq!(parse(OPENER, Sport::Bike), parse(OPENER, Sport::Bike));
}

#[test]
fn test_parses_run_concurrently() {
    let handles: Vec<_> = Sport::ALL
        .into_iter()
        .map(|sport| std::thread::spawn(move || parse(OPENER, sport)))
        .collect();
    for handle in handles {
        let output = handle.join().unwrap().unwrap();
        assert_eq!(output.document.total_duration().seconds(), Some(1740));
    }
}

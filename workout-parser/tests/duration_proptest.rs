//! Property-based tests for duration arithmetic and document structure

use proptest::prelude::*;
use workout_parser::workout::ast::{Decimal, Duration, TotalDuration};
use workout_parser::{parse, Sport};

fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "- [0-9]{1,3}[hms] z[0-9]",
        "- [0-9]{1,2}(\\.[0-9]{1,3})?km [0-9]{1,3}% [A-Za-z ]{0,8}",
        "[0-9]x",
        "# [A-Za-z ]{0,12}",
        "> [A-Za-z ]{0,12}",
        "",
        "[A-Za-z0-9 %.-]{0,16}",
    ]
}

proptest! {
    #[test]
    fn time_tokens_sum_to_seconds(h in 0u64..24, m in 0u64..60, s in 0u64..60) {
        let source = format!("- {h}h{m}m{s}s z2\n");
        let output = parse(&source, Sport::Bike).unwrap();
        prop_assert!(!output.has_errors());
        let first = output.document.timeline().next().map(|step| step.duration);
        prop_assert_eq!(first, Some(Duration::seconds(h * 3600 + m * 60 + s)));
    }

    #[test]
    fn kilometres_convert_exactly(whole in 0u64..100, thousandths in 0u64..1000) {
        let source = format!("- {whole}.{thousandths:03}km z2\n");
        let output = parse(&source, Sport::Run).unwrap();
        let expected = Decimal::from_integer(whole * 1000 + thousandths).unwrap();
        let first = output.document.timeline().next().map(|step| step.duration);
        prop_assert_eq!(first, Some(Duration::meters(expected)));
    }

    #[test]
    fn totals_multiply_by_repeat_count(count in 1u32..20, work in 1u64..600, rest in 1u64..600) {
        let source = format!("- 10m z1\n{count}x\n- {work}s z4\n- {rest}s z1\n");
        let output = parse(&source, Sport::Bike).unwrap();
        let document = &output.document;
        prop_assert_eq!(document.step_count(), 3);
        prop_assert_eq!(document.repetition_count(), 1 + 2 * count as usize);
        prop_assert_eq!(
            document.total_duration(),
            TotalDuration::Time { seconds: 600 + u64::from(count) * (work + rest) }
        );
    }

    #[test]
    fn step_count_matches_step_lines(
        steps in prop::collection::vec((1u64..3600, 1u32..=7), 1..12),
        split in 0usize..12,
        count in 1u32..6,
    ) {
        let split = split.min(steps.len());
        let mut lines: Vec<String> = Vec::new();
        for (index, (seconds, zone)) in steps.iter().enumerate() {
            if index == split {
                lines.push(format!("{count}x"));
            }
            lines.push(format!("- {seconds}s z{zone}"));
        }
        let output = parse(&lines.join("\n"), Sport::Bike).unwrap();
        prop_assert!(output.diagnostics.is_empty());
        prop_assert_eq!(output.document.step_count(), steps.len());
    }

    #[test]
    fn parsing_is_idempotent(lines in prop::collection::vec(line_strategy(), 0..24)) {
        let source = lines.join("\n");
        for sport in Sport::ALL {
            prop_assert_eq!(parse(&source, sport), parse(&source, sport));
        }
    }

    #[test]
    fn arbitrary_text_never_fails_the_parse(source in "\\PC{0,200}") {
        prop_assert!(parse(&source, Sport::Bike).is_ok());
    }
}

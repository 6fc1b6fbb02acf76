//! Fluent assertions over a parsed [`Document`]

use crate::workout::ast::{
    CadenceRange, Decimal, Document, Duration, IntensityClass, Metric, Repeat, Step, StepNode,
    TargetBasis, TargetKind, TotalDuration,
};

/// Start asserting on `doc`.
pub fn assert_workout(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

fn decimal(text: &str) -> Decimal {
    text.parse()
        .unwrap_or_else(|e| panic!("bad decimal in test expectation: {e}"))
}

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    pub fn title(self, expected: &str) -> Self {
        assert_eq!(
            self.doc.title(),
            Some(expected),
            "document: unexpected title"
        );
        self
    }

    pub fn no_title(self) -> Self {
        assert_eq!(self.doc.title(), None, "document: expected no title");
        self
    }

    pub fn incomplete(self, expected: bool) -> Self {
        assert_eq!(
            self.doc.is_incomplete(),
            expected,
            "document: expected incomplete = {expected}"
        );
        self
    }

    pub fn node_count(self, expected: usize) -> Self {
        let actual = self.doc.steps().len();
        assert_eq!(
            actual,
            expected,
            "document: expected {expected} top-level nodes, found {actual}: [{}]",
            summarize(self.doc.steps())
        );
        self
    }

    pub fn step_count(self, expected: usize) -> Self {
        assert_eq!(
            self.doc.step_count(),
            expected,
            "document: unexpected structural step count"
        );
        self
    }

    pub fn repetition_count(self, expected: usize) -> Self {
        assert_eq!(
            self.doc.repetition_count(),
            expected,
            "document: unexpected executed step count"
        );
        self
    }

    pub fn notes(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.doc.notes().iter().map(String::as_str).collect();
        assert_eq!(actual, expected, "document: unexpected notes");
        self
    }

    pub fn total(self, expected: TotalDuration) -> Self {
        assert_eq!(
            self.doc.total_duration(),
            expected,
            "document: unexpected total duration"
        );
        self
    }

    pub fn total_seconds(self, seconds: u64) -> Self {
        self.total(TotalDuration::Time { seconds })
    }

    pub fn total_meters(self, meters: &str) -> Self {
        self.total(TotalDuration::Distance {
            meters: decimal(meters),
        })
    }

    pub fn node<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let steps = self.doc.steps();
        assert!(
            index < steps.len(),
            "document: node index {index} out of bounds (document has {} nodes)",
            steps.len()
        );
        assertion(NodeAssertion {
            node: &steps[index],
            context: format!("nodes[{index}]"),
        });
        self
    }
}

pub struct NodeAssertion<'a> {
    node: &'a StepNode,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn assert_step(self) -> StepAssertion<'a> {
        match self.node {
            StepNode::Single(step) => StepAssertion {
                step,
                context: self.context,
            },
            StepNode::Repeat(repeat) => panic!(
                "{}: expected a single step, found a {}x repeat",
                self.context,
                repeat.count()
            ),
        }
    }

    pub fn assert_repeat(self) -> RepeatAssertion<'a> {
        match self.node {
            StepNode::Repeat(repeat) => RepeatAssertion {
                repeat,
                context: self.context,
            },
            StepNode::Single(step) => panic!(
                "{}: expected a repeat, found step `{step}`",
                self.context
            ),
        }
    }
}

pub struct RepeatAssertion<'a> {
    repeat: &'a Repeat,
    context: String,
}

impl<'a> RepeatAssertion<'a> {
    pub fn count(self, expected: u32) -> Self {
        assert_eq!(
            self.repeat.count(),
            expected,
            "{}: unexpected repeat count",
            self.context
        );
        self
    }

    pub fn label(self, expected: &str) -> Self {
        assert_eq!(
            self.repeat.label(),
            Some(expected),
            "{}: unexpected repeat label",
            self.context
        );
        self
    }

    pub fn body_len(self, expected: usize) -> Self {
        let actual = self.repeat.body().len();
        assert_eq!(
            actual,
            expected,
            "{}: expected {expected} body steps, found {actual}: [{}]",
            self.context,
            summarize(self.repeat.body())
        );
        self
    }

    pub fn step<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(StepAssertion<'a>) -> StepAssertion<'a>,
    {
        let body = self.repeat.body();
        assert!(
            index < body.len(),
            "{}: body index {index} out of bounds (repeat has {} steps)",
            self.context,
            body.len()
        );
        let node = NodeAssertion {
            node: &body[index],
            context: format!("{}:body[{index}]", self.context),
        };
        assertion(node.assert_step());
        self
    }
}

pub struct StepAssertion<'a> {
    step: &'a Step,
    context: String,
}

impl<'a> StepAssertion<'a> {
    pub fn duration(self, expected: Duration) -> Self {
        assert_eq!(
            self.step.duration, expected,
            "{}: unexpected duration",
            self.context
        );
        self
    }

    pub fn seconds(self, seconds: u64) -> Self {
        self.duration(Duration::seconds(seconds))
    }

    pub fn meters(self, meters: &str) -> Self {
        self.duration(Duration::meters(decimal(meters)))
    }

    pub fn kind(self, expected: TargetKind) -> Self {
        assert_eq!(
            self.step.target.kind, expected,
            "{}: unexpected target",
            self.context
        );
        self
    }

    pub fn zone(self, zone: u32) -> Self {
        self.zones(zone, zone)
    }

    pub fn zones(self, low: u32, high: u32) -> Self {
        let expected = TargetKind::zones(low, high)
            .unwrap_or_else(|e| panic!("{}: bad zone expectation: {e}", self.context));
        self.kind(expected)
    }

    pub fn percent(self, low: &str, high: &str) -> Self {
        self.kind(TargetKind::percent(decimal(low), decimal(high)))
    }

    pub fn watts(self, low: u32, high: u32) -> Self {
        self.kind(TargetKind::watts(low, high))
    }

    pub fn metric(self, expected: Metric) -> Self {
        assert_eq!(
            self.step.target.metric, expected,
            "{}: unexpected metric",
            self.context
        );
        self
    }

    pub fn ramp(self, expected: bool) -> Self {
        assert_eq!(
            self.step.target.is_ramp, expected,
            "{}: expected is_ramp = {expected}",
            self.context
        );
        self
    }

    pub fn label(self, expected: &str) -> Self {
        assert_eq!(
            self.step.label.as_deref(),
            Some(expected),
            "{}: unexpected label",
            self.context
        );
        self
    }

    pub fn no_label(self) -> Self {
        assert_eq!(
            self.step.label, None,
            "{}: expected no label",
            self.context
        );
        self
    }

    pub fn cadence(self, low: u32, high: u32) -> Self {
        assert_eq!(
            self.step.cadence,
            Some(CadenceRange { low, high }),
            "{}: unexpected cadence",
            self.context
        );
        self
    }

    pub fn intensity(self, expected: IntensityClass) -> Self {
        assert_eq!(
            self.step.intensity,
            Some(expected),
            "{}: unexpected intensity class",
            self.context
        );
        self
    }

    pub fn freeride(self, expected: bool) -> Self {
        assert_eq!(
            self.step.flags.freeride, expected,
            "{}: expected freeride = {expected}",
            self.context
        );
        self
    }

    pub fn max_effort(self, expected: bool) -> Self {
        assert_eq!(
            self.step.flags.max_effort, expected,
            "{}: expected max_effort = {expected}",
            self.context
        );
        self
    }

    pub fn hide_power(self, expected: bool) -> Self {
        assert_eq!(
            self.step.flags.hide_power, expected,
            "{}: expected hide_power = {expected}",
            self.context
        );
        self
    }

    pub fn basis(self, expected: TargetBasis) -> Self {
        assert_eq!(
            self.step.target.basis,
            Some(expected),
            "{}: unexpected target basis",
            self.context
        );
        self
    }
}

fn summarize(nodes: &[StepNode]) -> String {
    nodes
        .iter()
        .map(|node| match node {
            StepNode::Single(step) => step.to_string(),
            StepNode::Repeat(repeat) => {
                format!("{}x({} steps)", repeat.count(), repeat.body().len())
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::ast::Sport;
    use crate::workout::parse;

    #[test]
    fn test_fluent_walk() {
        let source = "# Short\n- 5m z2 Easy\n2x\n- 30s 120%\n- 30s 50%\n";
        let output = parse(source, Sport::Bike).unwrap();
        assert_workout(&output.document)
            .title("Short")
            .node_count(2)
            .node(0, |node| {
                node.assert_step().seconds(300).zone(2).label("Easy");
            })
            .node(1, |node| {
                node.assert_repeat()
                    .count(2)
                    .body_len(2)
                    .step(0, |step| step.seconds(30).percent("120", "120").no_label())
                    .step(1, |step| step.percent("50", "50"));
            })
            .total_seconds(420);
    }

    #[test]
    #[should_panic(expected = "nodes[0]: expected a repeat")]
    fn test_wrong_node_type_panics_with_path() {
        let output = parse("- 5m z2\n", Sport::Bike).unwrap();
        assert_workout(&output.document).node(0, |node| {
            node.assert_repeat();
        });
    }
}

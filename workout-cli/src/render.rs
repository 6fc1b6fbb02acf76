//! Output formats for the CLI
//!
//! `summary` and `lines` are for people; `json` and `yaml` serialize the whole
//! [`ParseOutput`] including diagnostics.

use std::fmt::Write;
use workout_parser::workout::ast::{StepNode, TotalDuration};
use workout_parser::workout::token::{ClassifiedLine, LineType};
use workout_parser::{Document, ParseOutput};

pub fn json(output: &ParseOutput) -> Result<String, String> {
    serde_json::to_string_pretty(output)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(|e| format!("JSON serialization failed: {}", e))
}

pub fn yaml(output: &ParseOutput) -> Result<String, String> {
    serde_yaml::to_string(output).map_err(|e| format!("YAML serialization failed: {}", e))
}

/// Title, an outline of the step tree, totals and notes.
pub fn summary(document: &Document) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", document.title().unwrap_or("(untitled)"));
    let _ = writeln!(out, "sport: {}", document.sport());
    for node in document.steps() {
        write_node(&mut out, node, 1);
    }
    let _ = writeln!(
        out,
        "total: {} ({} steps, {} executed)",
        total_label(&document.total_duration()),
        document.step_count(),
        document.repetition_count()
    );
    if !document.notes().is_empty() {
        let _ = writeln!(out, "notes:");
        for note in document.notes() {
            let _ = writeln!(out, "  > {}", note);
        }
    }
    if document.is_incomplete() {
        let _ = writeln!(out, "incomplete: structural errors were reported");
    }
    out
}

fn write_node(out: &mut String, node: &StepNode, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        StepNode::Single(step) => {
            let _ = writeln!(out, "{}- {} [{}]", indent, step, step.target.metric);
        }
        StepNode::Repeat(repeat) => {
            match repeat.label() {
                Some(label) => {
                    let _ = writeln!(out, "{}{}x {}", indent, repeat.count(), label);
                }
                None => {
                    let _ = writeln!(out, "{}{}x", indent, repeat.count());
                }
            }
            for child in repeat.body() {
                write_node(out, child, depth + 1);
            }
        }
    }
}

fn total_label(total: &TotalDuration) -> String {
    match total.seconds() {
        Some(seconds) if total.meters().is_none() => {
            format!("{} ({})", total, clock(seconds))
        }
        _ => total.to_string(),
    }
}

/// `h:mm:ss`
fn clock(seconds: u64) -> String {
    format!(
        "{}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

/// One row per physical line: number, line type and the lexed tokens of step lines.
pub fn lines(classified: &[ClassifiedLine]) -> String {
    let mut out = String::new();
    for line in classified {
        let _ = match &line.kind {
            LineType::Blank => writeln!(out, "{:>4}  blank", line.number),
            LineType::Title(title) => writeln!(out, "{:>4}  title    {}", line.number, title),
            LineType::Note(note) => writeln!(out, "{:>4}  note     {}", line.number, note),
            LineType::RepeatHeader { count, label } => writeln!(
                out,
                "{:>4}  repeat   {}x{}",
                line.number,
                count,
                label.as_deref().map(|l| format!(" {}", l)).unwrap_or_default()
            ),
            LineType::Step(tokens) => {
                let rendered: Vec<String> =
                    tokens.iter().map(|(token, _)| format!("{:?}", token)).collect();
                writeln!(out, "{:>4}  step     {}", line.number, rendered.join(" "))
            }
            LineType::Invalid => writeln!(out, "{:>4}  invalid", line.number),
        };
    }
    out
}

//! Standard pipelines
//!
//! The sport independent front half of the pipeline is built once as `Lazy` statics. The
//! full pipeline depends on [`ParseOptions`] and is assembled per call with
//! [`workout_pipeline`], reusing the statics through `then_transform`.

use crate::workout::assembling::{Assembly, ParseOutput};
use crate::workout::parsing::BlockTree;
use crate::workout::token::ClassifiedLine;
use crate::workout::transforms::stages::{
    CheckLimits, Classification, LineSplitting, Resolution, Structuring,
};
use crate::workout::transforms::{Staged, Transform};
use crate::workout::ParseOptions;
use once_cell::sync::Lazy;

pub type ClassificationTransform = Transform<String, Staged<Vec<ClassifiedLine>>>;

pub type StructureTransform = Transform<String, Staged<BlockTree>>;

pub type WorkoutTransform = Transform<String, ParseOutput>;

/// Source text → classified lines.
pub static CLASSIFICATION: Lazy<ClassificationTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(LineSplitting::new())
        .then(Classification::new())
});

/// Source text → block tree with unresolved step lines.
pub static STRUCTURE: Lazy<StructureTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then_transform(&*CLASSIFICATION)
        .then(Structuring::new())
});

/// [`CLASSIFICATION`] behind the input limits of `options`.
pub fn classification_pipeline(options: &ParseOptions) -> ClassificationTransform {
    Transform::from_fn(Ok)
        .then(CheckLimits::from(options))
        .then_transform(&*CLASSIFICATION)
}

/// The full pipeline for one set of options: limits, lexing, structuring, resolution and
/// assembly.
pub fn workout_pipeline(options: &ParseOptions) -> WorkoutTransform {
    Transform::from_fn(Ok)
        .then(CheckLimits::from(options))
        .then_transform(&*STRUCTURE)
        .then(Resolution::new(options.sport))
        .then(Assembly::new(options.sport))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::ast::Sport;
    use crate::workout::token::LineType;

    #[test]
    fn test_classification_pipeline() {
        let staged = CLASSIFICATION.run("3x\n- 1m z4\n".to_string()).unwrap();
        assert_eq!(
            staged.value[0].kind,
            LineType::RepeatHeader {
                count: 3,
                label: None
            }
        );
        assert!(staged.diagnostics.is_empty());
    }

    #[test]
    fn test_structure_pipeline() {
        let staged = STRUCTURE.run("- 5m z2\n\n- 5m z3\n".to_string()).unwrap();
        assert_eq!(staged.value.nodes.len(), 2);
    }

    #[test]
    fn test_classification_pipeline_checks_limits() {
        let options = ParseOptions {
            max_bytes: 4,
            ..ParseOptions::default()
        };
        let pipeline = classification_pipeline(&options);
        assert!(pipeline.run("- 5m".to_string()).is_ok());
        assert!(pipeline.run("- 5m z2".to_string()).is_err());
    }

    #[test]
    fn test_workout_pipeline() {
        let pipeline = workout_pipeline(&ParseOptions::new(Sport::Run));
        let output = pipeline.run("- 5m z2\n".to_string()).unwrap();
        assert_eq!(output.document.step_count(), 1);
        assert_eq!(output.document.sport(), Sport::Run);
    }
}

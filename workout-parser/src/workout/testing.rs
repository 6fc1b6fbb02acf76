//! Testing utilities
//!
//!     Tests should assert on the whole shape of a parsed workout, not on node counts alone.
//!     Walking `StepNode`s by hand takes a match per level and hides what is being checked,
//!     so the [assert_workout] fluent API does the walking:
//!
//!     ```rust,ignore
//!     use workout_parser::workout::testing::assert_workout;
//!
//!     assert_workout(&output.document)
//!         .title("Opener Workout (Day Before Race)")
//!         .node_count(3)
//!         .node(1, |node| {
//!             node.assert_repeat()
//!                 .count(3)
//!                 .step(0, |step| step.seconds(60).zone(4))
//!                 .step(1, |step| step.seconds(120).zone(1));
//!         })
//!         .total_seconds(1740);
//!     ```
//!
//!     Every assertion message carries a path such as `nodes[1]:body[0]` so a failure points
//!     at the offending step.
//!
//!     [factories] builds tokens and token streams for resolver level tests.

pub mod assertions;
pub mod factories;

pub use assertions::{
    assert_workout, DocumentAssertion, NodeAssertion, RepeatAssertion, StepAssertion,
};

//! Individual pipeline stages
//!
//! Each stage implements [`Runnable`](crate::workout::transforms::Runnable) and wraps one
//! function from the lexing or parsing modules. Assembly lives in
//! [assembling](crate::workout::assembling).

pub mod classification;
pub mod limits;
pub mod resolution;
pub mod splitting;
pub mod structuring;

pub use classification::Classification;
pub use limits::CheckLimits;
pub use resolution::Resolution;
pub use splitting::LineSplitting;
pub use structuring::Structuring;

//! plume-engine: text-correction engine
//!
//! Locates suggestion-service edits as concrete byte spans in the source
//! text, keeps every pending span valid as corrections are applied one at a
//! time or in bulk, and derives the plain/highlighted segment sequence a
//! renderer displays.

pub mod config;
pub mod core;
pub mod logging;

pub use crate::core::correction::{Correction, IdSeq};
pub use crate::core::locator::locate;
pub use crate::core::segment::{Segment, build_segments};
pub use crate::core::state::AnalysisState;
pub use crate::core::store::{AnalysisError, AnalysisRequest, Analyzer, CorrectionStore};

// The result-submission and aggregation engine: validation, pure
// aggregate folding, and the optimistic transactional recorder.

// Public API
pub use errors::{RecordError, ValidationError};
pub use recorder::{GameRecorder, DEFAULT_MAX_ATTEMPTS};
pub use validate::validate;

pub mod aggregate;
pub mod handlers;

mod errors;
mod recorder;
mod validate;

//! String-keyed mode dispatch.
//!
//! [`logic`] selects a reducer by name. Names are matched after trimming
//! surrounding whitespace and upper-casing, against the fixed table in
//! [`SUPPORTED_MODES`]. The table is a `static` array and is never
//! mutated, so concurrent lookups need no synchronization.
//!
//! [`LogicEngine`] bundles a default [`Mode`] with an [`EmptyPolicy`] for
//! callers that need the strict empty-input convention.

mod engine;
mod mode;

pub use engine::{logic, EmptyPolicy, LogicEngine};
pub use mode::{supported_mode_names, Mode, DEFAULT_MODE, SUPPORTED_MODES};

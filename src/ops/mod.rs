//! Core grouped boolean operations.
//!
//! Six base reducers and their aliases:
//!
//! | Function | Alias(es) | True when |
//! |---|---|---|
//! | [`and_`] | [`all_`] | every element is truthy |
//! | [`or_`] | | at least one element is truthy |
//! | [`xor_`] | [`one_`] | exactly one element is truthy |
//! | [`nor_`] | [`none_`] | no element is truthy |
//! | [`nand_`] | [`not_all_`] | at least one element is falsy |
//! | [`xnor_`] | [`all_equal_`], [`nxor_`] | all elements share the same truthiness |
//!
//! Complements are defined as the negation of their base operation.
//! All reducers use the vacuous convention on empty input; see
//! [`EmptyPolicy`](crate::dispatch::EmptyPolicy) for the strict one.

mod reducers;

pub use reducers::{and_, nand_, nor_, or_, xnor_, xor_};

pub use reducers::and_ as all_;
pub use reducers::nand_ as not_all_;
pub use reducers::nor_ as none_;
pub use reducers::xnor_ as all_equal_;
pub use reducers::xnor_ as nxor_;
pub use reducers::xor_ as one_;

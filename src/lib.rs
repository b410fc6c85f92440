//! Grouped boolean aggregation.
//!
//! Reduces collections of truthy/falsy values to a single answer:
//!
//! - **Core reducers** ([`ops`]): AND, OR, XOR (exactly one true) and
//!   their complements NAND, NOR, XNOR, plus the aliases ALL, NONE, ONE,
//!   NOT_ALL, ALL_EQUAL and NXOR.
//! - **Dispatcher** ([`dispatch`]): selects a reducer by a
//!   case-insensitive mode name such as `"xor"` or `" NOT_ALL "`.
//! - **Threshold helpers** ([`threshold`]): `count_true`, `exactly(n)`,
//!   `at_least(n)`, `at_most(n)`, `majority` and `quorum`, each with an
//!   early-exit scan.
//! - **Truthiness** ([`truth`]): the [`Truthy`] predicate and the
//!   [`Group`] normalizer that lets every function accept scalars,
//!   collections, and arbitrary iterables alike.
//!
//! # Examples
//!
//! ```
//! use group_logic::{and_, at_least, logic, majority, or_, xor_};
//!
//! assert!(and_([1, 2, 3]));
//! assert!(xor_(vec![false, true, false]));
//! assert!(majority(["yes", "", "ok"]));
//! assert!(at_least(2, [true, false, true]));
//! assert_eq!(logic([true, true, true], "xOr "), Ok(false));
//!
//! // Scalars are one-element groups; text is never split into characters.
//! assert!(and_("abc"));
//! assert!(!or_(""));
//! ```
//!
//! # Empty input
//!
//! Free functions follow the vacuous convention: `and_([])` is `true`,
//! `or_([])` and `xor_([])` are `false`, `xnor_([])` is `true`.
//! [`LogicEngine`] with [`EmptyPolicy::Strict`] treats emptiness as
//! failure instead.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Mode`], [`EmptyPolicy`]
//!   and [`Value`].
//! - `parallel`: rayon-backed reductions over slices in `parallel`.

pub mod dispatch;
pub mod error;
pub mod ops;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod threshold;
pub mod truth;

pub use dispatch::{
    logic, supported_mode_names, EmptyPolicy, LogicEngine, Mode, DEFAULT_MODE, SUPPORTED_MODES,
};
pub use error::LogicError;
pub use ops::{
    all_, all_equal_, and_, nand_, none_, nor_, not_all_, nxor_, one_, or_, xnor_, xor_,
};
pub use threshold::{at_least, at_most, count_false, count_true, exactly, majority, quorum};
pub use truth::{Each, Group, Truthy, Value};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

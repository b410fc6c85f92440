//! Mode names and the static dispatch table.

use crate::error::LogicError;
use crate::ops::{and_, nand_, nor_, or_, xnor_, xor_};
use crate::truth::Group;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A grouped logic operation, selectable by name.
///
/// Several modes are aliases: they resolve to the same reducer as
/// another mode (see [`Mode::base`]).
///
/// # Examples
///
/// ```
/// use group_logic::Mode;
///
/// let mode: Mode = " not_all ".parse().unwrap();
/// assert_eq!(mode, Mode::NotAll);
/// assert_eq!(mode.name(), "NOT_ALL");
/// assert_eq!(mode.base(), Mode::Nand);
/// assert!(mode.apply([true, false]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum Mode {
    /// Every element is truthy.
    #[default]
    And,
    /// At least one element is falsy.
    Nand,
    /// At least one element is truthy.
    Or,
    /// No element is truthy.
    Nor,
    /// Exactly one element is truthy.
    Xor,
    /// All elements share the same truthiness.
    Xnor,
    /// Alias of [`Mode::Xnor`].
    Nxor,
    /// Alias of [`Mode::Nor`].
    None,
    /// Alias of [`Mode::Xor`].
    One,
    /// Alias of [`Mode::And`].
    All,
    /// Alias of [`Mode::Nand`].
    NotAll,
    /// Alias of [`Mode::Xnor`].
    AllEqual,
}

/// Mode used when none is given.
pub const DEFAULT_MODE: Mode = Mode::And;

/// Every supported mode, in canonical order. Contains no duplicates.
pub static SUPPORTED_MODES: [Mode; 12] = [
    Mode::And,
    Mode::Nand,
    Mode::Or,
    Mode::Nor,
    Mode::Xor,
    Mode::Xnor,
    Mode::Nxor,
    Mode::None,
    Mode::One,
    Mode::All,
    Mode::NotAll,
    Mode::AllEqual,
];

/// Names of every supported mode, in the order of [`SUPPORTED_MODES`].
pub fn supported_mode_names() -> impl Iterator<Item = &'static str> {
    SUPPORTED_MODES.iter().map(|m| m.name())
}

impl Mode {
    /// The canonical upper-case name used for lookup.
    pub const fn name(self) -> &'static str {
        match self {
            Mode::And => "AND",
            Mode::Nand => "NAND",
            Mode::Or => "OR",
            Mode::Nor => "NOR",
            Mode::Xor => "XOR",
            Mode::Xnor => "XNOR",
            Mode::Nxor => "NXOR",
            Mode::None => "NONE",
            Mode::One => "ONE",
            Mode::All => "ALL",
            Mode::NotAll => "NOT_ALL",
            Mode::AllEqual => "ALL_EQUAL",
        }
    }

    /// The base mode this one resolves to once aliases are folded.
    ///
    /// Always one of `And`, `Nand`, `Or`, `Nor`, `Xor`, `Xnor`.
    pub const fn base(self) -> Mode {
        match self {
            Mode::And | Mode::All => Mode::And,
            Mode::Nand | Mode::NotAll => Mode::Nand,
            Mode::Or => Mode::Or,
            Mode::Nor | Mode::None => Mode::Nor,
            Mode::Xor | Mode::One => Mode::Xor,
            Mode::Xnor | Mode::Nxor | Mode::AllEqual => Mode::Xnor,
        }
    }

    /// Whether this mode is the negation of another base mode (NAND, NOR).
    pub const fn is_complement(self) -> bool {
        matches!(self.base(), Mode::Nand | Mode::Nor)
    }

    /// Applies the reducer for this mode.
    pub fn apply<G: Group>(self, values: G) -> bool {
        match self {
            Mode::And | Mode::All => and_(values),
            Mode::Nand | Mode::NotAll => nand_(values),
            Mode::Or => or_(values),
            Mode::Nor | Mode::None => nor_(values),
            Mode::Xor | Mode::One => xor_(values),
            Mode::Xnor | Mode::Nxor | Mode::AllEqual => xnor_(values),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = LogicError;

    /// Looks up a mode by name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_uppercase();
        SUPPORTED_MODES
            .iter()
            .copied()
            .find(|m| m.name() == key)
            .ok_or_else(|| {
                debug!(mode = %key, "rejected unknown logic mode");
                LogicError::UnknownMode {
                    mode: key,
                    supported: supported_mode_names().collect::<Vec<_>>().join(", "),
                }
            })
    }
}

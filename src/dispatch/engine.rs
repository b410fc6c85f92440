//! Name-based dispatch and the configurable evaluator.

use super::mode::Mode;
use crate::error::LogicError;
use crate::truth::{Each, Group};
use std::iter;
use tracing::trace;

/// How reducers treat an empty input.
///
/// The two conventions differ only when there is nothing to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum EmptyPolicy {
    /// Standard quantifier semantics: `AND([])` and `XNOR([])` are
    /// `true`, `OR([])` and `XOR([])` are `false`.
    #[default]
    Vacuous,

    /// Emptiness is failure: `AND`, `OR`, `XOR` and `XNOR` are all
    /// `false` on empty input. Complements remain negations, so `NAND`
    /// and `NOR` are `true`.
    Strict,
}

impl EmptyPolicy {
    /// Result of `mode` on an empty input under this policy.
    pub fn on_empty(self, mode: Mode) -> bool {
        match self {
            EmptyPolicy::Vacuous => mode.apply(Each(iter::empty::<bool>())),
            EmptyPolicy::Strict => mode.is_complement(),
        }
    }
}

/// Evaluates `values` with the reducer named by `mode`.
///
/// `mode` is matched case-insensitively after trimming surrounding
/// whitespace. Uses the vacuous empty-input convention; see
/// [`LogicEngine`] to choose another.
///
/// # Errors
///
/// Returns [`LogicError::UnknownMode`] if `mode` names no supported mode.
/// The error lists every supported name.
///
/// # Examples
///
/// ```
/// use group_logic::logic;
///
/// assert_eq!(logic([true, true, true], "xOr "), Ok(false));
/// assert_eq!(logic(vec![1, 0], "nand"), Ok(true));
/// assert!(logic([true], "UNKNOWN").is_err());
/// ```
pub fn logic<G: Group>(values: G, mode: &str) -> Result<bool, LogicError> {
    let mode: Mode = mode.parse()?;
    trace!(%mode, "dispatching");
    Ok(mode.apply(values))
}

/// A configured evaluator: a default mode plus an empty-input policy.
///
/// # Examples
///
/// ```
/// use group_logic::{EmptyPolicy, LogicEngine, Mode};
///
/// let engine = LogicEngine::new()
///     .with_mode(Mode::Xnor)
///     .with_empty_policy(EmptyPolicy::Strict);
///
/// assert!(engine.evaluate([1, 2, 3]));
/// assert!(!engine.evaluate(Vec::<i32>::new()));
/// assert_eq!(engine.evaluate_named([true, false], "or"), Ok(true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogicEngine {
    mode: Mode,
    empty_policy: EmptyPolicy,
}

impl LogicEngine {
    /// Creates an engine with mode `AND` and the vacuous empty policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the mode used by [`evaluate`](Self::evaluate).
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the empty-input policy.
    pub fn with_empty_policy(mut self, policy: EmptyPolicy) -> Self {
        self.empty_policy = policy;
        self
    }

    /// The configured mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The configured empty-input policy.
    pub fn empty_policy(&self) -> EmptyPolicy {
        self.empty_policy
    }

    /// Evaluates `values` with the configured mode.
    pub fn evaluate<G: Group>(&self, values: G) -> bool {
        self.evaluate_mode(values, self.mode)
    }

    /// Evaluates `values` with an explicit mode, honoring the empty policy.
    pub fn evaluate_mode<G: Group>(&self, values: G, mode: Mode) -> bool {
        let mut truths = values.truths().peekable();
        if truths.peek().is_none() {
            return self.empty_policy.on_empty(mode);
        }
        mode.apply(Each(truths))
    }

    /// Evaluates `values` with a mode looked up by name.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::UnknownMode`] if `mode` names no supported mode.
    pub fn evaluate_named<G: Group>(&self, values: G, mode: &str) -> Result<bool, LogicError> {
        let mode: Mode = mode.parse()?;
        trace!(%mode, policy = ?self.empty_policy, "dispatching");
        Ok(self.evaluate_mode(values, mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::SUPPORTED_MODES;

    #[test]
    fn test_logic_dispatch() {
        assert_eq!(logic([true, true, true], "xOr "), Ok(false));
        assert_eq!(logic([true, false, false], "one"), Ok(true));
        assert_eq!(logic([0, 0], "  NONE"), Ok(true));
        assert_eq!(logic("abc", "all"), Ok(true));
    }

    #[test]
    fn test_logic_unknown_mode() {
        let err = logic([true], "UNKNOWN").unwrap_err();
        let msg = err.to_string();
        for mode in SUPPORTED_MODES {
            assert!(msg.contains(mode.name()), "missing {mode} in {msg}");
        }
    }

    #[test]
    fn test_vacuous_empty_results() {
        let expected = [
            (Mode::And, true),
            (Mode::Nand, false),
            (Mode::Or, false),
            (Mode::Nor, true),
            (Mode::Xor, false),
            (Mode::Xnor, true),
            (Mode::Nxor, true),
            (Mode::None, true),
            (Mode::One, false),
            (Mode::All, true),
            (Mode::NotAll, false),
            (Mode::AllEqual, true),
        ];
        for (mode, want) in expected {
            assert_eq!(EmptyPolicy::Vacuous.on_empty(mode), want, "mode {mode}");
            assert_eq!(mode.apply(Vec::<bool>::new()), want, "mode {mode}");
        }
    }

    #[test]
    fn test_strict_empty_results() {
        let expected = [
            (Mode::And, false),
            (Mode::Nand, true),
            (Mode::Or, false),
            (Mode::Nor, true),
            (Mode::Xor, false),
            (Mode::Xnor, false),
            (Mode::Nxor, false),
            (Mode::None, true),
            (Mode::One, false),
            (Mode::All, false),
            (Mode::NotAll, true),
            (Mode::AllEqual, false),
        ];
        let engine = LogicEngine::new().with_empty_policy(EmptyPolicy::Strict);
        for (mode, want) in expected {
            assert_eq!(engine.evaluate_mode(Vec::<bool>::new(), mode), want, "mode {mode}");
        }
    }

    #[test]
    fn test_strict_matches_vacuous_on_non_empty() {
        let strict = LogicEngine::new().with_empty_policy(EmptyPolicy::Strict);
        let vacuous = LogicEngine::new();
        let samples: [&[u8]; 4] = [&[0], &[1], &[1, 0], &[1, 1, 0, 1]];
        for s in samples {
            for mode in SUPPORTED_MODES {
                assert_eq!(strict.evaluate_mode(s, mode), vacuous.evaluate_mode(s, mode));
                assert_eq!(vacuous.evaluate_mode(s, mode), mode.apply(s));
            }
        }
    }

    #[test]
    fn test_engine_defaults() {
        let engine = LogicEngine::new();
        assert_eq!(engine.mode(), Mode::And);
        assert_eq!(engine.empty_policy(), EmptyPolicy::Vacuous);
        assert!(engine.evaluate([1, 1]));
        assert!(!engine.evaluate([1, 0]));
    }

    #[test]
    fn test_engine_named() {
        let engine = LogicEngine::new().with_mode(Mode::Or);
        assert!(engine.evaluate([false, true]));
        assert_eq!(engine.evaluate_named([true, true], "xor"), Ok(false));
        assert!(engine.evaluate_named([true], "maybe").is_err());
    }

    #[test]
    fn test_engine_scalar_input() {
        let engine = LogicEngine::new().with_empty_policy(EmptyPolicy::Strict);
        assert!(engine.evaluate("text"));
        assert!(!engine.evaluate(""));
        assert!(engine.evaluate_mode(0, Mode::Nor));
    }
}

use smallvec::SmallVec;

/// Accumulated path cost. Unsigned, so no estimate can ever be negative.
pub type Cost = u32;

/// Legal actions from a state. Twelve covers the cube without spilling.
pub type Actions<A> = SmallVec<[A; 12]>;

/// A discrete-state puzzle an A* search can drive.
///
/// Every capability has a default body returning [`ProblemError::NotImplemented`],
/// so a model that forgets one fails loudly instead of silently doing nothing.
pub trait Problem {
    type State: Clone + Eq + core::hash::Hash + core::fmt::Debug;
    type Action: Copy + Eq + core::fmt::Debug + core::fmt::Display;

    /// Short name used in logs and error messages.
    fn name(&self) -> &'static str;

    fn actions(&self, _state: &Self::State) -> Result<Actions<Self::Action>, ProblemError> {
        Err(ProblemError::not_implemented(self.name(), "actions"))
    }

    /// Applies `action` to `state`, returning a fresh state and a positive step cost.
    ///
    /// Must fail with [`ProblemError::InvalidAction`] when `action` is not in
    /// `actions(state)`.
    fn successor(
        &self,
        _state: &Self::State,
        _action: Self::Action,
    ) -> Result<(Self::State, Cost), ProblemError> {
        Err(ProblemError::not_implemented(self.name(), "successor"))
    }

    fn is_terminal(&self, _state: &Self::State) -> Result<bool, ProblemError> {
        Err(ProblemError::not_implemented(self.name(), "is_terminal"))
    }

    fn describe(&self, _state: &Self::State) -> Result<String, ProblemError> {
        Err(ProblemError::not_implemented(self.name(), "describe"))
    }

    /// Rejects actions that are not legal from `state`.
    fn ensure_legal(&self, state: &Self::State, action: Self::Action) -> Result<(), ProblemError> {
        if self.actions(state)?.contains(&action) {
            Ok(())
        } else {
            Err(ProblemError::InvalidAction {
                action: action.to_string(),
                state: format!("{:?}", state),
            })
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    /// `successor` was asked for an action `actions` does not offer.
    #[error("action {action} is not legal from state {state}")]
    InvalidAction { action: String, state: String },
    /// The problem has not supplied this capability.
    #[error("{problem} does not implement {capability}")]
    NotImplemented {
        problem: &'static str,
        capability: &'static str,
    },
}

impl ProblemError {
    fn not_implemented(problem: &'static str, capability: &'static str) -> Self {
        ProblemError::NotImplemented {
            problem,
            capability,
        }
    }
}

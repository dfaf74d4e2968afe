//! The magic truck: reach position `goal` from `position` on a straight road,
//! either walking one step (cost 1) or riding the truck to twice the current
//! position (cost 2).

use crate::prelude::*;

mod heuristic;
pub use heuristic::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TruckState {
    position: u64,
    goal: u64,
}

impl TruckState {
    pub fn new(position: u64, goal: u64) -> anyhow::Result<TruckState> {
        anyhow::ensure!(
            position <= goal,
            "position {} is already past goal {}",
            position,
            goal
        );
        Ok(TruckState { position, goal })
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn goal(&self) -> u64 {
        self.goal
    }

    fn moved_to(self, position: u64) -> TruckState {
        TruckState { position, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TruckAction {
    Step,
    Truck,
}

impl core::fmt::Display for TruckAction {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            TruckAction::Step => write!(f, "step"),
            TruckAction::Truck => write!(f, "truck"),
        }
    }
}

impl core::str::FromStr for TruckAction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<TruckAction> {
        match s {
            "step" => Ok(TruckAction::Step),
            "truck" => Ok(TruckAction::Truck),
            _ => Err(anyhow::anyhow!("Unrecognized truck action {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MagicTruck;

impl Problem for MagicTruck {
    type State = TruckState;
    type Action = TruckAction;

    fn name(&self) -> &'static str {
        "magic truck"
    }

    fn actions(&self, state: &TruckState) -> Result<Actions<TruckAction>, ProblemError> {
        let mut actions = Actions::new();
        // No step off the end of u64, even when the goal sits there.
        if state.position <= state.goal && state.position.checked_add(1).is_some() {
            actions.push(TruckAction::Step);
        }
        if state
            .position
            .checked_mul(2)
            .is_some_and(|doubled| doubled <= state.goal)
        {
            actions.push(TruckAction::Truck);
        }
        Ok(actions)
    }

    fn successor(
        &self,
        state: &TruckState,
        action: TruckAction,
    ) -> Result<(TruckState, Cost), ProblemError> {
        self.ensure_legal(state, action)?;
        Ok(match action {
            TruckAction::Step => (state.moved_to(state.position + 1), 1),
            TruckAction::Truck => (state.moved_to(state.position * 2), 2),
        })
    }

    fn is_terminal(&self, state: &TruckState) -> Result<bool, ProblemError> {
        Ok(state.position == state.goal)
    }

    fn describe(&self, state: &TruckState) -> Result<String, ProblemError> {
        Ok(format!("Position: {} Goal: {}", state.position, state.goal))
    }
}

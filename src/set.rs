//! Active state sets and order queries
//!
//! A panel is only allowed to rest in some of the possible states. `StateSet`
//! holds that set plus the panel's initial state, and answers the questions a
//! behavior layer asks about them: traversal order, the least/most expanded
//! state, on-screen ordering for an anchor edge, and which states bracket a
//! given one.
//!
//! All queries rank states by their order value; no geometry is involved.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::position::PanelPosition;
use crate::state::PanelState;

/// The states a panel may rest in, plus where it starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSet {
    states: HashSet<PanelState>,
    initial: PanelState,
}

/// Nearest active states on either side of a point in order-space
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSegment {
    /// Nearest active state with a strictly smaller order, if any
    pub lower: Option<PanelState>,
    /// Nearest active state with a strictly larger order, if any
    pub upper: Option<PanelState>,
}

impl Default for StateSet {
    /// The common bottom-sheet setup: full, half and tip, starting at half
    fn default() -> Self {
        Self::new(
            [PanelState::FULL, PanelState::HALF, PanelState::TIP],
            PanelState::HALF,
        )
    }
}

impl StateSet {
    /// Create a set from any collection of states.
    ///
    /// The initial state is always part of the set. Duplicate names collapse
    /// to a single entry.
    pub fn new<I>(states: I, initial: PanelState) -> Self
    where
        I: IntoIterator<Item = PanelState>,
    {
        let mut states: HashSet<PanelState> = states.into_iter().collect();
        states.insert(initial.clone());
        Self { states, initial }
    }

    /// The state the panel starts in
    pub fn initial(&self) -> &PanelState {
        &self.initial
    }

    /// Number of active states
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Whether the panel may rest in `state`
    pub fn contains(&self, state: &PanelState) -> bool {
        self.states.contains(state)
    }

    /// Iterate active states in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &PanelState> {
        self.states.iter()
    }

    /// A state is settleable if it is active or `hidden`.
    ///
    /// `hidden` is always accepted so a panel can be dismissed even when its
    /// set does not list it.
    pub fn is_valid(&self, state: &PanelState) -> bool {
        self.states.contains(state) || *state == PanelState::HIDDEN
    }

    /// Resolve a requested state, substituting the initial state when the
    /// request is not settleable.
    pub fn resolve(&self, state: PanelState) -> PanelState {
        if self.is_valid(&state) {
            state
        } else {
            tracing::debug!(
                "state '{}' not active, falling back to '{}'",
                state,
                self.initial
            );
            self.initial.clone()
        }
    }

    /// Active states sorted ascending by order (least expanded first).
    ///
    /// Ties in order break by name so traversal is deterministic.
    pub fn ordered(&self) -> Vec<PanelState> {
        let mut states: Vec<PanelState> = self.states.iter().cloned().collect();
        states.sort_by(|a, b| {
            a.order()
                .cmp(&b.order())
                .then_with(|| a.name().cmp(b.name()))
        });
        states
    }

    /// Active states in on-screen order for a panel anchored at `position`.
    ///
    /// For a top-anchored panel ascending order already matches the screen
    /// direction; a bottom-anchored panel is the reverse.
    pub fn directional(&self, position: PanelPosition) -> Vec<PanelState> {
        let mut states = self.ordered();
        if position == PanelPosition::Bottom {
            states.reverse();
        }
        states
    }

    /// The least expanded active state, or `hidden` for an empty set
    pub fn least(&self) -> PanelState {
        self.ordered()
            .into_iter()
            .next()
            .unwrap_or(PanelState::HIDDEN)
    }

    /// The most expanded active state, or `hidden` for an empty set
    pub fn most(&self) -> PanelState {
        self.ordered()
            .into_iter()
            .last()
            .unwrap_or(PanelState::HIDDEN)
    }

    /// The active states bracketing `state` in order-space.
    ///
    /// Only strictly smaller/larger orders qualify, so the state itself (or
    /// an equal-order state) never appears in its own segment. A state
    /// outside the set still gets the pair it falls between.
    pub fn segment(&self, state: &PanelState) -> StateSegment {
        let ordered = self.ordered();
        let lower = ordered
            .iter()
            .rev()
            .find(|s| s.order() < state.order())
            .cloned();
        let upper = ordered.iter().find(|s| s.order() > state.order()).cloned();
        StateSegment { lower, upper }
    }
}

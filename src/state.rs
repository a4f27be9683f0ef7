//! Panel state tokens
//!
//! A floating panel rests at named positions rather than arbitrary offsets.
//! The state vocabulary is open-ended: four built-ins cover the common
//! bottom-sheet positions, and consumers can define their own states
//! (e.g. a "peek" state sitting between tip and half) without touching
//! this module.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A named resting position of a floating panel.
///
/// Equality and hashing use the name only (case-sensitive), so two
/// independently constructed tokens with the same name are interchangeable
/// and states work as `HashMap` keys. The order value ranks states by how
/// expanded the panel is (larger = more expanded) and never participates
/// in equality.
#[derive(Clone)]
pub struct PanelState {
    name: Cow<'static, str>,
    order: i32,
}

/// Registry of the predefined states
pub const BUILTIN_STATES: &[PanelState] = &[
    PanelState::FULL,
    PanelState::HALF,
    PanelState::TIP,
    PanelState::HIDDEN,
];

impl PanelState {
    /// The panel is fully expanded.
    pub const FULL: PanelState = PanelState::predefined("full", 1000);

    /// About half of the panel is visible.
    pub const HALF: PanelState = PanelState::predefined("half", 500);

    /// Only a small tip of the panel remains on screen.
    pub const TIP: PanelState = PanelState::predefined("tip", 100);

    /// The panel is off screen.
    pub const HIDDEN: PanelState = PanelState::predefined("hidden", 0);

    const fn predefined(name: &'static str, order: i32) -> Self {
        Self {
            name: Cow::Borrowed(name),
            order,
        }
    }

    /// Create a custom state with order 0.
    ///
    /// Names are taken as-is: no uniqueness or emptiness checks are
    /// performed. A custom state reusing a built-in name compares equal to
    /// that built-in.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            order: 0,
        }
    }

    /// Create a custom state ranked against the built-ins.
    ///
    /// Built-in orders are hidden 0 < tip 100 < half 500 < full 1000, so a
    /// state between tip and half would pick an order in the 100..500 range.
    pub fn with_order(name: impl Into<Cow<'static, str>>, order: i32) -> Self {
        Self {
            name: name.into(),
            order,
        }
    }

    /// Look up a built-in state by name (e.g. "half")
    pub fn from_builtin(name: &str) -> Option<PanelState> {
        BUILTIN_STATES.iter().find(|s| s.name == name).cloned()
    }

    /// The state's name, e.g. "full"
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Expansion rank; larger means more of the panel is visible
    pub const fn order(&self) -> i32 {
        self.order
    }

    /// Whether the name matches one of the four predefined states
    pub fn is_builtin(&self) -> bool {
        BUILTIN_STATES.iter().any(|s| s.name == self.name)
    }
}

impl PartialEq for PanelState {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for PanelState {}

impl Hash for PanelState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialEq<str> for PanelState {
    fn eq(&self, other: &str) -> bool {
        self.name == other
    }
}

impl PartialEq<&str> for PanelState {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

impl fmt::Display for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// Debug matches Display: the bare name, not a struct dump
impl fmt::Debug for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Serialize for PanelState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.name)
    }
}

impl<'de> Deserialize<'de> for PanelState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StateVisitor;

        impl Visitor<'_> for StateVisitor {
            type Value = PanelState;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a panel state name")
            }

            fn visit_str<E>(self, value: &str) -> Result<PanelState, E>
            where
                E: de::Error,
            {
                // Built-in names rehydrate with their order; anything else
                // is a custom state with order 0
                Ok(PanelState::from_builtin(value)
                    .unwrap_or_else(|| PanelState::new(value.to_owned())))
            }
        }

        deserializer.deserialize_str(StateVisitor)
    }
}

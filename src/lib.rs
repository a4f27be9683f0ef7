//! floatpanel - extensible state model for floating panel components
//!
//! Floating panels (bottom sheets, pull-up drawers) rest at a small set of
//! named positions instead of arbitrary offsets. This crate provides the
//! state vocabulary for such components:
//!
//! - [`PanelState`]: open-ended, string-identified state tokens with four
//!   built-ins (`full`, `half`, `tip`, `hidden`)
//! - [`PanelPosition`]: which screen edge the panel is anchored to
//! - [`StateSet`]: the states one panel may rest in, with order queries
//!
//! Geometry, gestures and animation are left to the embedding UI layer;
//! this crate only models the states themselves, so it can back any
//! windowing or widget toolkit.

pub mod position;
pub mod set;
pub mod state;

// Re-export commonly used types
pub use position::PanelPosition;
pub use set::{StateSegment, StateSet};
pub use state::{PanelState, BUILTIN_STATES};

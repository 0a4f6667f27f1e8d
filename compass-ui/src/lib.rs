//! compass-ui - Modal dialog component and the toolkit primitives it composes
//!
//! Contains the caller-controlled `Modal`, the `ModalToolkit` boundary it renders
//! through, a native `<dialog>` toolkit, and the shared button primitives.

pub mod components;
pub mod dom;
pub mod theme;

pub use components::*;
pub use theme::{SlideDirection, SurfaceStyle, ThemeError};

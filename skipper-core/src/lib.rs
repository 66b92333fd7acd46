//! Core types and view-state logic for the Skipper skip-hire selector.

/// Cyclic three-card window over the loaded offerings.
pub mod carousel;
/// Lifetime-scoped loading of offerings from a [`SkipSource`].
pub mod loader;
/// Domain models shared by sources and the renderer.
pub mod model;
/// Trait describing where skip offerings come from.
pub mod ports;
/// VAT-inclusive price derivation.
pub mod pricing;
/// Screen state and its named transitions.
pub mod state;
/// Fixed steps of the booking wizard.
pub mod wizard;

pub use carousel::*;
pub use loader::*;
pub use model::*;
pub use ports::*;
pub use pricing::*;
pub use state::*;
pub use wizard::*;

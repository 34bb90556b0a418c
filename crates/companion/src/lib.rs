//! Session facade and event re-exposure over a running host game.
//!
//! Builds on [`charm_registry`] to give companion modules one handle onto
//! a live host session:
//!
//! - [`host`] - Contracts the host binding implements ([`Host`],
//!   [`LocationState`], [`StageState`])
//! - [`Companion`] - Forwarded manager state and the definitions registry
//! - [`events`] - Host lifecycle events re-exposed to subscribers
//!
//! ```rust,ignore
//! let companion = Companion::new(&host);
//! if let Some(girl) = companion.current_girl() {
//!     let trail = companion.defs().random::<EnergyTrailDef, _>(&mut rng)?;
//! }
//! ```

pub mod events;
pub mod host;
mod session;

pub use charm_registry as registry;
pub use events::{Events, GameEvent};
pub use host::{Host, LocationState, StageState};
pub use session::Companion;

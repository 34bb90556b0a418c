//! Access contracts for the host session.
//!
//! The host binding implements these against the game's live managers and
//! passes the [`Host`] handle in explicitly; the companion layer holds no
//! ambient globals, so its lifetime is tied to the host session that
//! created it.

use charm_registry::HostData;
use charm_registry::defs::{GirlDef, LocationDef};

/// Live location state owned by the host's location manager.
pub trait LocationState {
	/// The location currently active, if any.
	fn current_location(&self) -> Option<&LocationDef>;

	/// The girl currently active at the location, if any.
	fn current_girl(&self) -> Option<&GirlDef>;
}

/// Live stage state owned by the host's stage object.
pub trait StageState {
	/// Key of the main girl currently on the stage.
	fn girl_id(&self) -> Option<i32>;

	/// Key of the alt girl currently on the stage.
	fn alt_girl_id(&self) -> Option<i32>;
}

/// The host session surface the companion layer is granted.
pub trait Host {
	/// The central data manager.
	fn data(&self) -> &dyn HostData;

	/// The location manager, once a session is active.
	fn location(&self) -> Option<&dyn LocationState>;

	/// The stage, once the host has set it up.
	fn stage(&self) -> Option<&dyn StageState>;
}

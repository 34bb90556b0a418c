//! The host data manager contract.

use crate::defs::{
	AbilityDef, ActionMenuItemDef, CellAppDef, DebugProfileDef, DialogSceneDef, DialogTriggerDef,
	EnergyTrailDef, GirlDef, ItemDef, LocationDef, MessageDef, ParticleDef, PuzzleTokenDef,
	SpriteGroupDef, TraitDef,
};
use crate::source::{BulkSource, KeyedSource};

/// Access contract for the host's central data manager.
///
/// One accessor per record kind. Every accessor defaults to `None`: a host
/// session that has not (or no longer) wired a holder simply reports it
/// absent, which extraction surfaces as
/// [`RegistryError::MissingHolder`](crate::RegistryError::MissingHolder).
///
/// Girl and puzzle-token holders enumerate themselves; all others grant
/// access to their id-keyed backing map.
pub trait HostData {
	/// Holder for date gift abilities.
	fn abilities(&self) -> Option<&dyn KeyedSource<AbilityDef>> {
		None
	}

	/// Holder for action menu entries.
	fn action_menu_items(&self) -> Option<&dyn KeyedSource<ActionMenuItemDef>> {
		None
	}

	/// Holder for cellphone applications.
	fn cell_apps(&self) -> Option<&dyn KeyedSource<CellAppDef>> {
		None
	}

	/// Holder for developer debug profiles.
	fn debug_profiles(&self) -> Option<&dyn KeyedSource<DebugProfileDef>> {
		None
	}

	/// Holder for dialog scenes.
	fn dialog_scenes(&self) -> Option<&dyn KeyedSource<DialogSceneDef>> {
		None
	}

	/// Holder for dialog triggers.
	fn dialog_triggers(&self) -> Option<&dyn KeyedSource<DialogTriggerDef>> {
		None
	}

	/// Holder for match-trail effects.
	fn energy_trails(&self) -> Option<&dyn KeyedSource<EnergyTrailDef>> {
		None
	}

	/// Holder for girls; enumerates itself.
	fn girls(&self) -> Option<&dyn BulkSource<GirlDef>> {
		None
	}

	/// Holder for inventory items.
	fn items(&self) -> Option<&dyn KeyedSource<ItemDef>> {
		None
	}

	/// Holder for locations.
	fn locations(&self) -> Option<&dyn KeyedSource<LocationDef>> {
		None
	}

	/// Holder for cellphone messages.
	fn messages(&self) -> Option<&dyn KeyedSource<MessageDef>> {
		None
	}

	/// Holder for particle emitters.
	fn particles(&self) -> Option<&dyn KeyedSource<ParticleDef>> {
		None
	}

	/// Holder for puzzle tokens; enumerates itself.
	fn puzzle_tokens(&self) -> Option<&dyn BulkSource<PuzzleTokenDef>> {
		None
	}

	/// Holder for sprite groups.
	fn sprite_groups(&self) -> Option<&dyn KeyedSource<SpriteGroupDef>> {
		None
	}

	/// Holder for girl personality traits.
	fn traits(&self) -> Option<&dyn KeyedSource<TraitDef>> {
		None
	}
}

//! Type-to-holder dispatch bindings.
//!
//! One binding per record kind ties the record type to its discriminator
//! and to the holder accessor that produces it. Coverage of the closed set
//! is checked at compile time; there is no name-based fallback, so an
//! unbound kind cannot silently yield an empty snapshot.

use crate::defs::{
	AbilityDef, ActionMenuItemDef, CellAppDef, DebugProfileDef, DialogSceneDef, DialogTriggerDef,
	EnergyTrailDef, GirlDef, ItemDef, LocationDef, MessageDef, ParticleDef, PuzzleTokenDef,
	SpriteGroupDef, TraitDef,
};
use crate::error::RegistryError;
use crate::host::HostData;
use crate::kind::DefKind;
use crate::source::{snapshot_bulk, snapshot_keyed};

/// A record type the registry can extract from the host.
///
/// Implemented for exactly the closed set of record kinds.
pub trait Def: Sized {
	/// Discriminator for this record type.
	const KIND: DefKind;

	/// The record's key, unique within its kind.
	fn id(&self) -> i32;

	/// Snapshots every record of this type from the host's holder.
	fn snapshot<'d>(data: &'d dyn HostData) -> Result<Vec<&'d Self>, RegistryError>;
}

/// Binds a record type to a keyed holder accessor.
macro_rules! keyed_def {
	($ty:ty, $kind:ident, $accessor:ident) => {
		impl Def for $ty {
			const KIND: DefKind = DefKind::$kind;

			fn id(&self) -> i32 {
				self.id
			}

			fn snapshot<'d>(data: &'d dyn HostData) -> Result<Vec<&'d Self>, RegistryError> {
				snapshot_keyed(data.$accessor(), DefKind::$kind)
			}
		}
	};
}

/// Binds a record type to a self-enumerating holder accessor.
macro_rules! bulk_def {
	($ty:ty, $kind:ident, $accessor:ident) => {
		impl Def for $ty {
			const KIND: DefKind = DefKind::$kind;

			fn id(&self) -> i32 {
				self.id
			}

			fn snapshot<'d>(data: &'d dyn HostData) -> Result<Vec<&'d Self>, RegistryError> {
				snapshot_bulk(data.$accessor(), DefKind::$kind)
			}
		}
	};
}

keyed_def!(AbilityDef, Ability, abilities);
keyed_def!(ActionMenuItemDef, ActionMenuItem, action_menu_items);
keyed_def!(CellAppDef, CellApp, cell_apps);
keyed_def!(DebugProfileDef, DebugProfile, debug_profiles);
keyed_def!(DialogSceneDef, DialogScene, dialog_scenes);
keyed_def!(DialogTriggerDef, DialogTrigger, dialog_triggers);
keyed_def!(EnergyTrailDef, EnergyTrail, energy_trails);
bulk_def!(GirlDef, Girl, girls);
keyed_def!(ItemDef, Item, items);
keyed_def!(LocationDef, Location, locations);
keyed_def!(MessageDef, Message, messages);
keyed_def!(ParticleDef, Particle, particles);
bulk_def!(PuzzleTokenDef, PuzzleToken, puzzle_tokens);
keyed_def!(SpriteGroupDef, SpriteGroup, sprite_groups);
keyed_def!(TraitDef, Trait, traits);

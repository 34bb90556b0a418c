//! The public registry facade.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::defs::{
	AbilityDef, ActionMenuItemDef, CellAppDef, DebugProfileDef, DialogSceneDef, DialogTriggerDef,
	EnergyTrailDef, GirlDef, GirlId, ItemDef, LocationDef, LocationId, MessageDef, ParticleDef,
	PuzzleTokenDef, SpriteGroupDef, TraitDef,
};
use crate::dispatch::Def;
use crate::error::RegistryError;
use crate::host::HostData;
use crate::kind::DefKind;

/// Typed facade over the host's definition collections.
///
/// Holds only the data manager reference passed at construction; its
/// lifecycle is the caller's, tied to the host session. Every query
/// re-extracts from current host state, so results are point-in-time
/// snapshots and consecutive calls may observe host-side changes.
pub struct Definitions<'d> {
	data: &'d dyn HostData,
}

impl<'d> Definitions<'d> {
	/// Creates a registry over the given host data manager.
	pub fn new(data: &'d dyn HostData) -> Self {
		Self { data }
	}

	/// All records of type `T`, in the host holder's order.
	///
	/// An existing-but-empty holder yields an empty vec, never an error.
	/// Ordering follows the host's internal order and is not stable
	/// across host versions.
	pub fn all_of<T: Def>(&self) -> Result<Vec<&'d T>, RegistryError> {
		T::snapshot(self.data)
	}

	/// Draws one record of type `T` uniformly at random.
	///
	/// Fails with [`RegistryError::Empty`] when the holder has no records.
	pub fn random<T, R>(&self, rng: &mut R) -> Result<&'d T, RegistryError>
	where
		T: Def,
		R: Rng + ?Sized,
	{
		let records = self.all_of::<T>()?;
		records.choose(rng).copied().ok_or(RegistryError::Empty(T::KIND))
	}

	/// The first record of type `T` whose key equals `id`.
	///
	/// Absence is a normal outcome, reported as `Ok(None)`.
	pub fn find_by_id<T: Def>(&self, id: i32) -> Result<Option<&'d T>, RegistryError> {
		Ok(self.all_of::<T>()?.into_iter().find(|record| record.id() == id))
	}

	/// The girl with the given typed id.
	pub fn girl(&self, id: GirlId) -> Result<Option<&'d GirlDef>, RegistryError> {
		self.find_by_id(id as i32)
	}

	/// The first girl whose first name matches, case-insensitively.
	pub fn girl_named(&self, first_name: &str) -> Result<Option<&'d GirlDef>, RegistryError> {
		Ok(self
			.all_of::<GirlDef>()?
			.into_iter()
			.find(|girl| girl.first_name.eq_ignore_ascii_case(first_name)))
	}

	/// The location with the given typed id.
	pub fn location(&self, id: LocationId) -> Result<Option<&'d LocationDef>, RegistryError> {
		self.find_by_id(id as i32)
	}

	/// Number of records currently held for `kind`.
	pub fn count(&self, kind: DefKind) -> Result<usize, RegistryError> {
		Ok(self.ids(kind)?.len())
	}

	/// Keys of every record currently held for `kind`, in holder order.
	pub fn ids(&self, kind: DefKind) -> Result<Vec<i32>, RegistryError> {
		match kind {
			DefKind::Ability => self.ids_of::<AbilityDef>(),
			DefKind::ActionMenuItem => self.ids_of::<ActionMenuItemDef>(),
			DefKind::CellApp => self.ids_of::<CellAppDef>(),
			DefKind::DebugProfile => self.ids_of::<DebugProfileDef>(),
			DefKind::DialogScene => self.ids_of::<DialogSceneDef>(),
			DefKind::DialogTrigger => self.ids_of::<DialogTriggerDef>(),
			DefKind::EnergyTrail => self.ids_of::<EnergyTrailDef>(),
			DefKind::Girl => self.ids_of::<GirlDef>(),
			DefKind::Item => self.ids_of::<ItemDef>(),
			DefKind::Location => self.ids_of::<LocationDef>(),
			DefKind::Message => self.ids_of::<MessageDef>(),
			DefKind::Particle => self.ids_of::<ParticleDef>(),
			DefKind::PuzzleToken => self.ids_of::<PuzzleTokenDef>(),
			DefKind::SpriteGroup => self.ids_of::<SpriteGroupDef>(),
			DefKind::Trait => self.ids_of::<TraitDef>(),
		}
	}

	fn ids_of<T: Def>(&self) -> Result<Vec<i32>, RegistryError> {
		Ok(self.all_of::<T>()?.iter().map(|record| record.id()).collect())
	}
}

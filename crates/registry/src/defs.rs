//! Binding types for the host's definition records.
//!
//! One struct per record kind, mirroring the fields the host stores. The
//! registry itself reads only each record's `id` (and `first_name` for
//! girls); everything else is carried for external modules to consume.

use serde::{Deserialize, Serialize};
use strum_macros::{FromRepr, VariantArray};

/// A date gift ability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityDef {
	pub id: i32,
	pub name: String,
	pub energy_cost: i32,
}

/// An entry of the in-game action menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionMenuItemDef {
	pub id: i32,
	pub label: String,
	pub order: i32,
}

/// A cellphone application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellAppDef {
	pub id: i32,
	pub name: String,
}

/// A developer debug profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugProfileDef {
	pub id: i32,
	pub name: String,
}

/// A dialog scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogSceneDef {
	pub id: i32,
	pub name: String,
}

/// A trigger that starts a dialog scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogTriggerDef {
	pub id: i32,
	pub name: String,
	pub scene_id: i32,
}

/// A match-trail visual effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyTrailDef {
	pub id: i32,
	pub name: String,
}

/// A datable girl.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GirlDef {
	pub id: i32,
	/// Human first name; the target of the case-insensitive name lookup.
	pub first_name: String,
	pub last_name: String,
	pub age: i32,
}

/// An inventory item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDef {
	pub id: i32,
	pub name: String,
	pub cost: i32,
}

/// A visitable location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDef {
	pub id: i32,
	pub name: String,
}

/// A cellphone message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDef {
	pub id: i32,
	pub text: String,
	pub girl_id: i32,
}

/// A 2D particle emitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleDef {
	pub id: i32,
	pub name: String,
}

/// A puzzle board token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleTokenDef {
	pub id: i32,
	pub name: String,
}

/// A sprite group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteGroupDef {
	pub id: i32,
	pub name: String,
}

/// A girl personality trait.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitDef {
	pub id: i32,
	pub name: String,
}

/// Typed keys of the girl records shipped with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromRepr, VariantArray)]
#[repr(i32)]
pub enum GirlId {
	Aiko = 1,
	Kyu = 2,
	Noelle = 3,
	Priya = 4,
	Marisol = 5,
	Sakura = 6,
	Dawn = 7,
	Vesper = 8,
}

/// Typed keys of the location records shipped with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromRepr, VariantArray)]
#[repr(i32)]
pub enum LocationId {
	Cafe = 1,
	Park = 2,
	Beach = 3,
	Gym = 4,
	Bar = 5,
	Mall = 6,
	Campus = 7,
	Rooftop = 8,
}

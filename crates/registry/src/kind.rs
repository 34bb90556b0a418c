//! Record kind discriminator for the closed set of definition types.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::VariantArray;

use crate::error::RegistryError;

/// The record kinds held by the host's central data manager.
///
/// The set is closed and fixed at build time: every variant has exactly one
/// binding in the dispatch layer, and kind-indexed operations match
/// exhaustively. A kind missing a binding is a compile error, never a
/// silent empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, VariantArray)]
pub enum DefKind {
	/// Date gift abilities.
	Ability,
	/// Entries of the in-game action menu.
	ActionMenuItem,
	/// Cellphone applications.
	CellApp,
	/// Developer debug profiles.
	DebugProfile,
	/// Dialog scenes.
	DialogScene,
	/// Triggers that start dialog scenes.
	DialogTrigger,
	/// Match-trail visual effects.
	EnergyTrail,
	/// Datable girls.
	Girl,
	/// Inventory items.
	Item,
	/// Visitable locations.
	Location,
	/// Cellphone messages.
	Message,
	/// 2D particle emitters.
	Particle,
	/// Puzzle board tokens.
	PuzzleToken,
	/// Sprite groups.
	SpriteGroup,
	/// Girl personality traits.
	Trait,
}

impl DefKind {
	/// Stable lower-snake name, used by [`fmt::Display`] and [`parse`](Self::parse).
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Ability => "ability",
			Self::ActionMenuItem => "action_menu_item",
			Self::CellApp => "cell_app",
			Self::DebugProfile => "debug_profile",
			Self::DialogScene => "dialog_scene",
			Self::DialogTrigger => "dialog_trigger",
			Self::EnergyTrail => "energy_trail",
			Self::Girl => "girl",
			Self::Item => "item",
			Self::Location => "location",
			Self::Message => "message",
			Self::Particle => "particle",
			Self::PuzzleToken => "puzzle_token",
			Self::SpriteGroup => "sprite_group",
			Self::Trait => "trait",
		}
	}

	/// Parses a kind name produced by [`as_str`](Self::as_str).
	///
	/// A name outside the closed set fails with
	/// [`RegistryError::UnsupportedKind`].
	pub fn parse(name: &str) -> Result<Self, RegistryError> {
		match name {
			"ability" => Ok(Self::Ability),
			"action_menu_item" => Ok(Self::ActionMenuItem),
			"cell_app" => Ok(Self::CellApp),
			"debug_profile" => Ok(Self::DebugProfile),
			"dialog_scene" => Ok(Self::DialogScene),
			"dialog_trigger" => Ok(Self::DialogTrigger),
			"energy_trail" => Ok(Self::EnergyTrail),
			"girl" => Ok(Self::Girl),
			"item" => Ok(Self::Item),
			"location" => Ok(Self::Location),
			"message" => Ok(Self::Message),
			"particle" => Ok(Self::Particle),
			"puzzle_token" => Ok(Self::PuzzleToken),
			"sprite_group" => Ok(Self::SpriteGroup),
			"trait" => Ok(Self::Trait),
			_ => Err(RegistryError::UnsupportedKind(name.to_string())),
		}
	}
}

impl fmt::Display for DefKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use strum::VariantArray;

	use super::*;

	#[test]
	fn parse_round_trips_every_kind() {
		for &kind in DefKind::VARIANTS {
			assert_eq!(DefKind::parse(kind.as_str()), Ok(kind));
			assert_eq!(kind.to_string(), kind.as_str());
		}
	}

	#[test]
	fn parse_rejects_unknown_names() {
		let err = DefKind::parse("furniture").unwrap_err();
		assert_eq!(err, RegistryError::UnsupportedKind("furniture".into()));
	}
}

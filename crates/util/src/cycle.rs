//! Cyclic navigation over enum variant sets.
//!
//! Works with any enum deriving `strum::VariantArray`, e.g. cycling a
//! debug overlay through the typed girl or location ids.

use rand::Rng;
use rand::seq::SliceRandom;
use strum::VariantArray;

/// The variant following `value` in declaration order, wrapping at the end.
pub fn next<T>(value: T) -> T
where
	T: VariantArray + PartialEq + Copy,
{
	let variants = T::VARIANTS;
	let index = variants.iter().position(|v| *v == value).unwrap_or(0);
	variants[(index + 1) % variants.len()]
}

/// The variant preceding `value` in declaration order, wrapping at the start.
pub fn previous<T>(value: T) -> T
where
	T: VariantArray + PartialEq + Copy,
{
	let variants = T::VARIANTS;
	let index = variants.iter().position(|v| *v == value).unwrap_or(0);
	variants[(index + variants.len() - 1) % variants.len()]
}

/// A uniformly random variant, or `None` for variant-less enums.
pub fn random_variant<T, R>(rng: &mut R) -> Option<T>
where
	T: VariantArray + Copy,
	R: Rng + ?Sized,
{
	T::VARIANTS.choose(rng).copied()
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;
	use strum_macros::VariantArray;

	use super::*;

	#[derive(Debug, Clone, Copy, PartialEq, VariantArray)]
	enum Season {
		Spring,
		Summer,
		Autumn,
		Winter,
	}

	#[test]
	fn next_wraps_past_the_end() {
		assert_eq!(next(Season::Spring), Season::Summer);
		assert_eq!(next(Season::Winter), Season::Spring);
	}

	#[test]
	fn previous_wraps_past_the_start() {
		assert_eq!(previous(Season::Winter), Season::Autumn);
		assert_eq!(previous(Season::Spring), Season::Winter);
	}

	#[test]
	fn random_variant_is_a_member() {
		let mut rng = StdRng::seed_from_u64(3);
		for _ in 0..20 {
			let season: Season = random_variant(&mut rng).unwrap();
			assert!(Season::VARIANTS.contains(&season));
		}
	}
}

//! Measurement and timestamp conversions for host profile strings.
//!
//! The host stores girl measurements as imperial display strings; these
//! helpers turn them into metric values, and back-convert metric weight
//! strings for display.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

const INCHES_PER_METER: f64 = 39.370078;

static LENGTH: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r#"^(?:(\d+)')?\s*(?:(\d+)(?:\s*(\d+)/(\d+))?")?$"#).expect("length pattern")
});

static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("number pattern"));

/// Converts a unix timestamp (seconds, fractional allowed) to a UTC date.
///
/// Returns `None` for timestamps outside chrono's representable range.
pub fn date_from_unix_timestamp(timestamp: f64) -> Option<DateTime<Utc>> {
	DateTime::from_timestamp_millis((timestamp * 1000.0) as i64)
}

/// Parses a `5'9"`-style length string and returns the length in meters.
///
/// Accepts feet-only (`5'`), inches-only (`9"`), combined, and
/// fractional-inch (`5'9 1/2"`) forms; returns `None` when the string
/// does not parse.
pub fn feet_inches_to_meters(length: &str) -> Option<f32> {
	let caps = LENGTH.captures(length.trim())?;
	let (feet, inches) = (caps.get(1), caps.get(2));
	if feet.is_none() && inches.is_none() {
		return None;
	}

	let feet: u32 = feet.map_or(Ok(0), |m| m.as_str().parse()).ok()?;
	let inches: u32 = inches.map_or(Ok(0), |m| m.as_str().parse()).ok()?;
	let fraction = match (caps.get(3), caps.get(4)) {
		(Some(numerator), Some(denominator)) => {
			let numerator: u32 = numerator.as_str().parse().ok()?;
			let denominator: u32 = denominator.as_str().parse().ok()?;
			if denominator == 0 {
				return None;
			}
			f64::from(numerator) / f64::from(denominator)
		}
		_ => 0.0,
	};

	let total_inches = f64::from(feet * 12 + inches) + fraction;
	Some((total_inches / INCHES_PER_METER) as f32)
}

/// Converts a weight display string to the opposite unit.
///
/// `"120 lbs"` becomes kilograms, `"54 kg"` becomes pounds. Strings with
/// no positive number or an unrecognized unit pass through unchanged.
pub fn convert_weight(weight: &str) -> String {
	let value = NUMBER
		.find(weight)
		.and_then(|m| m.as_str().parse::<f32>().ok())
		.unwrap_or(0.0);
	if value <= 0.0 {
		return weight.to_string();
	}

	let lower = weight.to_lowercase();
	if lower.contains("lbs") || lower.contains("pound") {
		format!("{} KG", (value * 0.453592).round() as i32)
	} else if lower.contains("kg") || lower.contains("kilo") {
		format!("{} lbs", (value * 2.20462).round() as i32)
	} else {
		weight.to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn timestamp_to_utc_date() {
		let epoch = date_from_unix_timestamp(0.0).unwrap();
		assert_eq!(epoch, DateTime::from_timestamp(0, 0).unwrap());

		let day_one = date_from_unix_timestamp(86_400.5).unwrap();
		assert_eq!(day_one, DateTime::from_timestamp_millis(86_400_500).unwrap());
	}

	#[test]
	fn parses_common_length_forms() {
		let tall = feet_inches_to_meters("5'9\"").unwrap();
		assert!((tall - 1.7526).abs() < 0.001, "got {tall}");

		let feet_only = feet_inches_to_meters("5'").unwrap();
		assert!((feet_only - 1.524).abs() < 0.001);

		let inches_only = feet_inches_to_meters("9\"").unwrap();
		assert!((inches_only - 0.2286).abs() < 0.001);

		let fractional = feet_inches_to_meters("5'9 1/2\"").unwrap();
		assert!(fractional > tall);
	}

	#[test]
	fn rejects_unparseable_lengths() {
		assert_eq!(feet_inches_to_meters(""), None);
		assert_eq!(feet_inches_to_meters("tall"), None);
		assert_eq!(feet_inches_to_meters("5 meters"), None);
		assert_eq!(feet_inches_to_meters("5'9 1/0\""), None);
	}

	#[test]
	fn weight_converts_both_directions() {
		assert_eq!(convert_weight("120 lbs"), "54 KG");
		assert_eq!(convert_weight("54 kg"), "119 lbs");
		assert_eq!(convert_weight("120 pounds"), "54 KG");
	}

	#[test]
	fn weight_passes_through_when_unit_is_unknown() {
		assert_eq!(convert_weight("120 stone"), "120 stone");
		assert_eq!(convert_weight("heavy"), "heavy");
		assert_eq!(convert_weight("0 kg"), "0 kg");
	}
}

//! Byte readers for plugin files and embedded resources.

use std::fs;
use std::path::Path;

use tracing::warn;

/// Reads a file's bytes from disk.
///
/// Missing or unreadable files log a warning and return `None`.
pub fn file_contents(path: &Path) -> Option<Vec<u8>> {
	match fs::read(path) {
		Ok(bytes) => Some(bytes),
		Err(err) => {
			warn!(path = %path.display(), %err, "unable to read file");
			None
		}
	}
}

/// Static table of resources embedded in a plugin via `include_bytes!`.
///
/// ```rust,ignore
/// static RESOURCES: ResourcePack = ResourcePack::new(&[
///     ("images/logo.png", include_bytes!("../resources/logo.png")),
/// ]);
/// ```
pub struct ResourcePack {
	entries: &'static [(&'static str, &'static [u8])],
}

impl ResourcePack {
	/// Creates a pack over a static entry table.
	pub const fn new(entries: &'static [(&'static str, &'static [u8])]) -> Self {
		Self { entries }
	}

	/// The bytes embedded under `name`.
	///
	/// Logs a warning and returns `None` when nothing is embedded under
	/// that name.
	pub fn get(&self, name: &str) -> Option<&'static [u8]> {
		match self.entries.iter().find(|(entry, _)| *entry == name) {
			Some((_, bytes)) => Some(bytes),
			None => {
				warn!(name, "resource not embedded in pack");
				None
			}
		}
	}
}

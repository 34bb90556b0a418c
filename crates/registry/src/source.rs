//! Host collection contracts and snapshot extraction.
//!
//! The host keeps one collection holder per record kind. Two holder shapes
//! exist: most store records in an id-keyed map they grant access to
//! ([`KeyedSource`]), a few enumerate their records themselves
//! ([`BulkSource`]). Extraction snapshots a holder into an ordered borrowed
//! sequence; nothing is cached, every call re-reads current host state.

use indexmap::IndexMap;

use crate::error::RegistryError;
use crate::kind::DefKind;

/// Access contract for a holder that stores records in an id-keyed map.
///
/// The backing map is a capability the host binding grants explicitly. A
/// holder may refuse (`None`) when its internal shape no longer matches
/// this registry; extraction surfaces that as
/// [`RegistryError::BackingStore`].
pub trait KeyedSource<T> {
	/// The `id → record` backing map, in the host's insertion order.
	fn backing(&self) -> Option<&IndexMap<i32, T>>;
}

/// Access contract for a holder that enumerates its own records.
pub trait BulkSource<T> {
	/// All records currently held, in the host's order.
	fn records(&self) -> Vec<&T>;
}

/// Snapshots a keyed holder into its ordered record sequence.
pub(crate) fn snapshot_keyed<'d, T>(
	holder: Option<&'d dyn KeyedSource<T>>,
	kind: DefKind,
) -> Result<Vec<&'d T>, RegistryError> {
	let holder = holder.ok_or(RegistryError::MissingHolder(kind))?;
	let backing = holder.backing().ok_or(RegistryError::BackingStore(kind))?;
	Ok(backing.values().collect())
}

/// Snapshots a self-enumerating holder.
pub(crate) fn snapshot_bulk<'d, T>(
	holder: Option<&'d dyn BulkSource<T>>,
	kind: DefKind,
) -> Result<Vec<&'d T>, RegistryError> {
	let holder = holder.ok_or(RegistryError::MissingHolder(kind))?;
	Ok(holder.records())
}

/// Reference keyed holder for host bindings and tests.
#[derive(Debug)]
pub struct KeyedStore<T> {
	records: IndexMap<i32, T>,
}

impl<T> KeyedStore<T> {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self {
			records: IndexMap::new(),
		}
	}

	/// Inserts a record under its key, returning any displaced record.
	pub fn insert(&mut self, id: i32, record: T) -> Option<T> {
		self.records.insert(id, record)
	}

	/// Number of records held.
	pub fn len(&self) -> usize {
		self.records.len()
	}

	/// Returns true when the store holds no records.
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

impl<T> Default for KeyedStore<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> KeyedSource<T> for KeyedStore<T> {
	fn backing(&self) -> Option<&IndexMap<i32, T>> {
		Some(&self.records)
	}
}

/// Reference self-enumerating holder for host bindings and tests.
#[derive(Debug)]
pub struct BulkStore<T> {
	records: Vec<T>,
}

impl<T> BulkStore<T> {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self { records: Vec::new() }
	}

	/// Appends a record.
	pub fn push(&mut self, record: T) {
		self.records.push(record);
	}

	/// Number of records held.
	pub fn len(&self) -> usize {
		self.records.len()
	}

	/// Returns true when the store holds no records.
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

impl<T> Default for BulkStore<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> BulkSource<T> for BulkStore<T> {
	fn records(&self) -> Vec<&T> {
		self.records.iter().collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keyed_snapshot_preserves_insertion_order() {
		let mut store = KeyedStore::new();
		store.insert(30, "c");
		store.insert(10, "a");
		store.insert(20, "b");

		let snapshot = snapshot_keyed(Some(&store), DefKind::Item).unwrap();
		assert_eq!(snapshot, vec![&"c", &"a", &"b"]);
	}

	#[test]
	fn missing_holder_is_an_error() {
		let err = snapshot_keyed::<&str>(None, DefKind::Item).unwrap_err();
		assert_eq!(err, RegistryError::MissingHolder(DefKind::Item));

		let err = snapshot_bulk::<&str>(None, DefKind::Girl).unwrap_err();
		assert_eq!(err, RegistryError::MissingHolder(DefKind::Girl));
	}

	#[test]
	fn refused_backing_store_is_an_error() {
		struct Sealed;

		impl KeyedSource<&'static str> for Sealed {
			fn backing(&self) -> Option<&IndexMap<i32, &'static str>> {
				None
			}
		}

		let err = snapshot_keyed(Some(&Sealed), DefKind::Trait).unwrap_err();
		assert_eq!(err, RegistryError::BackingStore(DefKind::Trait));
	}
}

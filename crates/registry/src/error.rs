//! Registry error types.

use thiserror::Error;

use crate::kind::DefKind;

/// Errors raised by registry operations.
///
/// Lookups that simply find nothing return `Ok(None)` instead; absence is a
/// normal outcome, not an error. None of these abort the host: callers are
/// expected to treat [`Empty`](Self::Empty) as recoverable and the other
/// variants as a host/registry incompatibility that fails the one operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
	/// The host data manager exposes no holder for this kind.
	#[error("no {0} holder on the host data manager")]
	MissingHolder(DefKind),
	/// The holder exists but does not grant access to its backing store.
	///
	/// Indicates the host's data-manager shape no longer matches this
	/// registry; surfaced, never swallowed.
	#[error("{0} holder does not expose its backing store")]
	BackingStore(DefKind),
	/// A kind name outside the closed set.
	#[error("unsupported record kind `{0}`")]
	UnsupportedKind(String),
	/// A random draw was requested over an empty snapshot.
	#[error("no {0} records to draw from")]
	Empty(DefKind),
}

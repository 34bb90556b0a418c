//! Typed definition registry over the host game's data manager.
//!
//! The host keeps one collection holder per record kind (girls, items,
//! locations, …) but exposes no uniform enumeration API for them. This
//! crate locates the holder for a requested record type, snapshots it into
//! an ordered typed sequence, and layers generic queries (random pick,
//! lookup by key or name) on top:
//!
//! - [`defs`] - Binding types for the host's records and typed ids
//! - [`DefKind`] - Closed-set record kind discriminator
//! - [`HostData`] + [`KeyedSource`]/[`BulkSource`] - Host access contracts
//! - [`Def`] - Per-kind dispatch bindings
//! - [`Definitions`] - The query facade
//!
//! ```rust,ignore
//! let defs = Definitions::new(&host_data);
//! let girls = defs.all_of::<GirlDef>()?;
//! let gift = defs.random::<ItemDef, _>(&mut rng)?;
//! let kyu = defs.girl_named("kyu")?;
//! ```
//!
//! Everything is synchronous and read-only: snapshots are taken per call
//! from current host state, on the host's main execution context.

pub mod defs;
mod dispatch;
mod error;
mod host;
mod kind;
mod registry;
mod source;

pub use dispatch::Def;
pub use error::RegistryError;
pub use host::HostData;
pub use kind::DefKind;
pub use registry::Definitions;
pub use source::{BulkSource, BulkStore, KeyedSource, KeyedStore};

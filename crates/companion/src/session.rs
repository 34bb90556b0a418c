//! Session facade over the host managers.

use charm_registry::Definitions;
use charm_registry::defs::{GirlDef, GirlId, LocationDef, LocationId};

use crate::host::Host;

/// Companion-side view of a running host session.
///
/// Forwards the host's live manager state (current location, current
/// girl, stage occupants) and hands out a [`Definitions`] registry over
/// its data manager. Stateless: every accessor reads current host state.
pub struct Companion<'h> {
	host: &'h dyn Host,
}

impl<'h> Companion<'h> {
	/// Creates a companion view over the given host session.
	pub fn new(host: &'h dyn Host) -> Self {
		Self { host }
	}

	/// Registry over the host's definition collections.
	pub fn defs(&self) -> Definitions<'h> {
		Definitions::new(self.host.data())
	}

	/// The definition of the location that is currently active.
	pub fn current_location(&self) -> Option<&'h LocationDef> {
		self.host.location()?.current_location()
	}

	/// The typed id of the location that is currently active.
	pub fn current_location_id(&self) -> Option<LocationId> {
		LocationId::from_repr(self.current_location()?.id)
	}

	/// The definition of the girl that is currently active.
	pub fn current_girl(&self) -> Option<&'h GirlDef> {
		self.host.location()?.current_girl()
	}

	/// The typed id of the girl that is currently active.
	pub fn current_girl_id(&self) -> Option<GirlId> {
		GirlId::from_repr(self.current_girl()?.id)
	}

	/// The typed id of the main girl currently on the stage.
	pub fn stage_girl_id(&self) -> Option<GirlId> {
		GirlId::from_repr(self.host.stage()?.girl_id()?)
	}

	/// The typed id of the alt girl currently on the stage.
	pub fn stage_alt_girl_id(&self) -> Option<GirlId> {
		GirlId::from_repr(self.host.stage()?.alt_girl_id()?)
	}
}

#[cfg(test)]
mod tests {
	use charm_registry::HostData;

	use super::*;
	use crate::host::{LocationState, StageState};

	struct EmptyData;

	impl HostData for EmptyData {}

	#[derive(Default)]
	struct FakeLocation {
		location: Option<LocationDef>,
		girl: Option<GirlDef>,
	}

	impl LocationState for FakeLocation {
		fn current_location(&self) -> Option<&LocationDef> {
			self.location.as_ref()
		}

		fn current_girl(&self) -> Option<&GirlDef> {
			self.girl.as_ref()
		}
	}

	struct FakeStage {
		girl_id: Option<i32>,
		alt_girl_id: Option<i32>,
	}

	impl StageState for FakeStage {
		fn girl_id(&self) -> Option<i32> {
			self.girl_id
		}

		fn alt_girl_id(&self) -> Option<i32> {
			self.alt_girl_id
		}
	}

	struct FakeHost {
		data: EmptyData,
		location: Option<FakeLocation>,
		stage: Option<FakeStage>,
	}

	impl Host for FakeHost {
		fn data(&self) -> &dyn HostData {
			&self.data
		}

		fn location(&self) -> Option<&dyn LocationState> {
			self.location.as_ref().map(|l| l as &dyn LocationState)
		}

		fn stage(&self) -> Option<&dyn StageState> {
			self.stage.as_ref().map(|s| s as &dyn StageState)
		}
	}

	#[test]
	fn forwards_current_location_and_girl() {
		let host = FakeHost {
			data: EmptyData,
			location: Some(FakeLocation {
				location: Some(LocationDef {
					id: 2,
					name: "Park".to_string(),
				}),
				girl: Some(GirlDef {
					id: 1,
					first_name: "Aiko".to_string(),
					last_name: "Yumi".to_string(),
					age: 25,
				}),
			}),
			stage: Some(FakeStage {
				girl_id: Some(2),
				alt_girl_id: None,
			}),
		};
		let companion = Companion::new(&host);

		assert_eq!(companion.current_location().unwrap().name, "Park");
		assert_eq!(companion.current_location_id(), Some(LocationId::Park));
		assert_eq!(companion.current_girl_id(), Some(GirlId::Aiko));
		assert_eq!(companion.stage_girl_id(), Some(GirlId::Kyu));
		assert_eq!(companion.stage_alt_girl_id(), None);
	}

	#[test]
	fn absent_managers_read_as_none() {
		let host = FakeHost {
			data: EmptyData,
			location: None,
			stage: None,
		};
		let companion = Companion::new(&host);

		assert!(companion.current_location().is_none());
		assert!(companion.current_girl_id().is_none());
		assert!(companion.stage_girl_id().is_none());
	}
}

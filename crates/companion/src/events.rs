//! Re-exposure of host lifecycle events.
//!
//! The host binding forwards the game's own callbacks into [`Events`];
//! companion modules subscribe with plain closures. Dispatch is
//! synchronous on the host's main execution context, in registration
//! order.

use tracing::debug;

/// Host lifecycle moments the companion layer re-exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
	/// The host froze all game elements but the cellphone.
	Pause,
	/// The host unfroze all game elements.
	Unpause,
	/// Arrival at a location has been initialized, before it settles.
	LocationArrive {
		/// Key of the location being arrived at.
		location_id: i32,
	},
	/// Departure towards a new location has been set up.
	LocationDepart {
		/// Key of the location being departed to.
		location_id: i32,
	},
	/// The stage finished setting up its child elements.
	StageStarted,
}

/// Synchronous event dispatcher driven by the host binding.
#[derive(Default)]
pub struct Events {
	subscribers: Vec<Box<dyn FnMut(GameEvent)>>,
}

impl Events {
	/// Creates a dispatcher with no subscribers.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a subscriber for all events.
	pub fn subscribe(&mut self, subscriber: impl FnMut(GameEvent) + 'static) {
		self.subscribers.push(Box::new(subscriber));
	}

	/// Delivers an event to every subscriber, in registration order.
	pub fn emit(&mut self, event: GameEvent) {
		debug!(?event, "dispatching game event");
		for subscriber in &mut self.subscribers {
			subscriber(event);
		}
	}

	/// Number of registered subscribers.
	pub fn subscriber_count(&self) -> usize {
		self.subscribers.len()
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;

	use super::*;

	#[test]
	fn subscribers_observe_events_in_registration_order() {
		let seen = Rc::new(RefCell::new(Vec::new()));
		let mut events = Events::new();

		for tag in ["first", "second"] {
			let seen = Rc::clone(&seen);
			events.subscribe(move |event| seen.borrow_mut().push((tag, event)));
		}

		events.emit(GameEvent::Pause);
		events.emit(GameEvent::LocationArrive { location_id: 3 });

		assert_eq!(
			*seen.borrow(),
			vec![
				("first", GameEvent::Pause),
				("second", GameEvent::Pause),
				("first", GameEvent::LocationArrive { location_id: 3 }),
				("second", GameEvent::LocationArrive { location_id: 3 }),
			],
		);
	}

	#[test]
	fn subscriber_count_tracks_registrations() {
		let mut events = Events::new();
		assert_eq!(events.subscriber_count(), 0);
		events.subscribe(|_| {});
		assert_eq!(events.subscriber_count(), 1);
	}
}

//! Presence – a value that may be absent, and what you can do with it.
//!
//! The heart of the crate is [`optional::Optional`], a container that either
//! holds exactly one value of type `T` or holds nothing:
//! * Construction: [`Optional::of`] (asserts a value exists),
//!   [`Optional::of_nullable`] (accepts a missing one) and [`Optional::empty`].
//! * Extraction: [`Optional::is_present`] and the [`Optional::get`] escape hatch.
//! * Transformation: [`Optional::map`], [`Optional::map_nullable`],
//!   [`Optional::flat_map`], [`Optional::filter`].
//! * Defaults: [`Optional::or_else`] (eager), [`Optional::or_else_get`] (lazy),
//!   [`Optional::or`] (lazy, yields another optional) and
//!   [`Optional::or_else_throw`] (lazy error).
//! * Sequences: [`Optional::to_sequence`] plus the helpers in [`sequence`].
//!
//! ## Modules
//! * [`optional`] – The container and its iterators.
//! * [`sequence`] – Filtering and flattening collections of optionals.
//! * [`error`] – [`error::PresenceError`] and the crate `Result` alias.
//! * [`flight`] – Flights and conflicts, the running example payloads.
//! * [`probe`] – Injectable sources deciding whether a conflict exists.
//! * [`demo`] – Narrated scenarios exercising every operation.
//! * [`config`] – Layered settings for the `presence` binary.
//!
//! ## Quick Start
//! ```
//! use presence::Optional;
//! use presence::flight::{Conflict, NoConflictError};
//!
//! let found = Optional::present(Conflict::new(1));
//! assert_eq!(found.get().unwrap().id(), 1);
//!
//! let clear: Optional<Conflict> = Optional::empty();
//! let err = clear.or_else_throw(|| NoConflictError::new("SAT3455")).unwrap_err();
//! assert_eq!(err.aircraft_id(), "SAT3455");
//! ```

pub mod config;
pub mod demo;
pub mod error;
pub mod flight;
pub mod optional;
pub mod probe;
pub mod sequence;

pub use error::{PresenceError, Result};
pub use optional::Optional;
pub use sequence::{PresentValues, filter_present_and_unwrap};

//! Small utilities over JSON-like objects, plus a ticket-queue simulator.
//!
//! # Scope
//!
//! - **Objects** - copy, merge, remove keys, compare, emptiness, freezing
//! - **Words** - rebuilding a word from letter positions
//! - **Tickets** - can a cashier with an empty drawer serve a queue?
//! - **Shapes and JSON** - a rectangle with a computed area, typed JSON round trips
//! - **Collections** - sorting city records and grouping into a multimap
//!
//! An "object" here is a [`serde_json::Map`], which keeps insertion order.

/// City records and their canonical ordering.
pub mod cities;
/// Errors reported by this crate.
pub mod error;
/// Read-only wrappers.
pub mod frozen;
/// Grouping values into an insertion-ordered multimap.
pub mod group;
/// Typed JSON round trips.
pub mod json;
/// Operations on JSON objects.
pub mod object;
/// Shapes used with the JSON helpers.
pub mod shapes;
/// The ticket-queue change-making simulation.
pub mod tickets;
/// Rebuilding words from letter positions.
pub mod word;

pub use cities::{CityEntry, sort_cities_array};
pub use error::{ObjectsError, TicketError};
pub use frozen::{Frozen, make_immutable};
pub use group::{Multimap, group};
pub use json::{from_json, get_json};
pub use object::{
    Object, compare_objects, is_empty_object, merge_objects, remove_properties, shallow_copy,
};
pub use shapes::{Circle, Rectangle};
pub use tickets::{Bill, TICKET_PRICE, TicketSeller, sell_tickets};
pub use word::make_word;

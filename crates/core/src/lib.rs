//! # Bookwell Core
//!
//! Domain types and the availability engine for staff appointment booking.
//!
//! The engine answers two questions for the booking flow: "may this staff member
//! take an appointment over this interval?" ([`engine::BookingEngine::validate_schedule`])
//! and "which start times are still open on this date?"
//! ([`engine::BookingEngine::get_available_slots`]). It reads from the stores in
//! [`store`] and never locks; making validate-then-insert atomic is the caller's job.
//!
//! All timestamps are local wall-clock values (`chrono::NaiveDateTime`). No time-zone
//! conversion happens anywhere in this crate.

pub mod engine;
pub mod errors;
pub mod memory;
pub mod models;
pub mod store;

pub use engine::BookingEngine;
pub use errors::{BookingError, BookingResult};

//! # worktime-engine
//!
//! Free/busy analysis over a single worker's daily schedule.
//!
//! A [`ScheduleIndex`] is built once from a list of working days and busy
//! intervals, then answers read-only queries keyed by date: which intervals are
//! busy, which gaps are free, whether a requested range is available, and which
//! gaps can fit a meeting of a given length (optionally padded by a buffer).
//!
//! ## Modules
//!
//! - [`time`] — `TimeOfDay` and `TimeRange` ("HH:MM" / "HH:MM-HH:MM")
//! - [`date`] — Date string validation (`YYYY-MM-DD`)
//! - [`model`] — `WorkDay` and `BusyInterval` records
//! - [`source`] — `ScheduleSource` trait and JSON-backed sources
//! - [`index`] — `ScheduleIndex` construction and lookup
//! - [`freebusy`] — Gap sweep over busy intervals within a working window
//! - [`availability`] — Date-keyed queries on the index
//! - [`error`] — Error types
//!
//! ## Quick start
//!
//! ```rust
//! use worktime_engine::{Schedule, ScheduleIndex};
//!
//! let schedule = Schedule::from_json(r#"{
//!     "days": [{"id": 1, "date": "2024-10-10", "start": "09:00", "end": "18:00"}],
//!     "intervals": [
//!         {"id": 1, "day_id": 1, "start": "11:00", "end": "12:00"},
//!         {"id": 2, "day_id": 1, "start": "13:00", "end": "16:00"}
//!     ]
//! }"#).unwrap();
//! let index = ScheduleIndex::from_schedule(schedule).unwrap();
//!
//! let free = index.list_free_intervals("2024-10-10").unwrap();
//! let free: Vec<String> = free.iter().map(ToString::to_string).collect();
//! assert_eq!(free, ["09:00-11:00", "12:00-13:00", "16:00-18:00"]);
//! ```

pub mod availability;
pub mod date;
pub mod error;
pub mod freebusy;
pub mod index;
pub mod model;
pub mod source;
pub mod time;

pub use date::parse_date;
pub use error::ScheduleError;
pub use index::ScheduleIndex;
pub use model::{BusyInterval, WorkDay};
pub use source::{FileSource, Schedule, ScheduleSource};
pub use time::{TimeOfDay, TimeRange};

//! Shared showroom domain model and storefront logic.
//!
//! This crate owns everything the storefront pages and the CLI agree on: the
//! vehicle wire model, model-code filtering, the two-slot comparison
//! selection, booking form validation and appointment submission, and the
//! data-source abstraction that falls back to the bundled static catalog when
//! the remote service is unavailable. It has no browser or network
//! dependency; front ends plug their own transport in through
//! [`source::VehicleSource`] and [`appointment::AppointmentService`].

pub mod appointment;
pub mod booking;
pub mod compare;
pub mod endpoint;
pub mod featured;
pub mod filter;
pub mod format;
pub mod listing;
pub mod load;
pub mod mock;
pub mod model_code;
pub mod selection;
pub mod source;
pub mod vehicle;

pub use appointment::{AppointmentPayload, AppointmentRequest, AppointmentService, BookingReceipt, SubmitError};
pub use booking::{BookingForm, BookingPhase, Field, FieldErrors, PickupMode};
pub use filter::{FilterKey, FilterState};
pub use format::format_price;
pub use listing::VehicleListing;
pub use load::LoadState;
pub use model_code::ModelCode;
pub use selection::{SelectionChange, SelectionSet};
pub use source::{Fetched, Origin, SourceError, SourceResolver, StaticSource, VehicleSource};
pub use vehicle::{ApiEnvelope, Vehicle};

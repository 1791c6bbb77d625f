//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only state that outlives a single page lives here: the signed-in session
//! and the comparison hand-off between the listing and the compare view.
//! Page-local state (filters, form fields, load status) is created on mount
//! and dropped with the page.

pub mod comparison;
pub mod session;

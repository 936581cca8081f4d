//! Services layer - Business logic
//!
//! Services sit between the HTTP handlers and the repositories. They:
//! - apply business rules
//! - validate input
//! - turn empty lookups into `NotFound`

pub mod session;

pub use session::{SessionService, SessionServiceError};

//! Data models
//!
//! Types shared by the server and the CLI:
//! - Database entity (`Session`)
//! - API request/response types (`CreateSessionInput`, `SessionData`)
//! - Query parameters (`DateRange`, `DateRangeQuery`)

mod date_range;
mod session;

pub use date_range::{
    default_start_date, format_date, parse_date, DateParseError, DateRange, DateRangeQuery,
    DATE_LAYOUT, DEFAULT_START_DATE,
};
pub use session::{total_duration, CreateSessionInput, Session, SessionData};

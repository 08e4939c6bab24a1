//! # API Route Modules
//!
//! - `campuses`: campuses, rosters, enrollment, and
//!   roster grouping under `/api/campuses`.

pub mod campuses;

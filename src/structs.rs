pub mod auth;
pub mod leave_requests;
pub mod patch;
pub mod shifts;
pub mod timestamp;

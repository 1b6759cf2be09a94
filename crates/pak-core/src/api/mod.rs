//! Builder entry points, each `execute` loads the carrier fresh from disk.

pub mod clear;
pub mod extract;
pub mod inject;
pub mod inspect;

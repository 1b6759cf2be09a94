pub mod clear;
pub mod extract;
pub mod inject;
pub mod inspect;

use crate::PakError;

pub type Result<T> = std::result::Result<T, PakError>;

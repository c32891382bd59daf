//! Row structs and DTOs for the feedback database.

pub mod feedback;

//! Pure helpers shared by the shell utilities.
//!
//! Nothing in here touches the filesystem or spawns processes.

pub mod date;
pub mod path;

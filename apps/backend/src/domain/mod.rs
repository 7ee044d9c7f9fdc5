//! Pure draft domain logic - no I/O.

pub mod snake;
pub mod timers;

// handlers/mod.rs - Two-tier handler layout
//
// Public (no Pronote session needed) → Protected (the Pronote client must
// already hold a session, otherwise the client answers NOT_AUTHENTICATED).
pub mod public;    // /, /health, /api/auth/login
pub mod protected; // /api/grades, /api/homework, /api/timetable

pub use public::*;
pub use protected::*;

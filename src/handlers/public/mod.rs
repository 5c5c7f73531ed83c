// handlers/public/mod.rs - Public handlers (no Pronote session required)
//
// Service information, liveness, and the login route that opens the Pronote
// session every protected handler relies on.

pub mod auth;
pub mod system;

pub use auth::*;
pub use system::{health, root};

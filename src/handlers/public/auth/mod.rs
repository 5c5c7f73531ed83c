// handlers/public/auth/mod.rs - Public authentication handlers

pub mod login; // POST /api/auth/login - open a Pronote session

pub use login::login_post;

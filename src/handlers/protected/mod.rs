// handlers/protected/mod.rs - Handlers that need an open Pronote session
//
// Every handler here maps a NOT_AUTHENTICATED client failure to 401 and any
// other failure to 500. Query parameters are the only input.

pub mod grades;    // GET /api/grades
pub mod homework;  // GET /api/homework
pub mod timetable; // GET /api/timetable
pub mod utils;

pub use grades::grades_get;
pub use homework::homework_get;
pub use timetable::timetable_get;

//! Domain logic for the SND administration backend.
//!
//! Pure calendar arithmetic and business rules with no I/O: generation
//! window derivation, working-day rules, and the result/failure taxonomy
//! of a timesheet auto-generation run. Database and HTTP concerns live in
//! `snd-db` and `snd-api`.

pub mod error;
pub mod generation;
pub mod types;
pub mod window;
pub mod workday;

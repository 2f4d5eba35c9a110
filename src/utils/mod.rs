//! Small cross-cutting helpers (logging, deterministic RNG).

#[macro_use]
pub mod log;
pub mod random;

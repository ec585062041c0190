//! Free-text normalizers for the two vocabularies persisted by callers:
//! component names and license strings.
//!
//! Both are deterministic pure functions over static rule tables; they hold
//! no state and are safe to call concurrently from any subsystem producing
//! free text.

pub mod component;
pub mod license;

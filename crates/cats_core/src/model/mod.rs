//! Domain model for the cats record store.
//!
//! # Responsibility
//! - Define the record shape shared by repository, service and delivery layers.
//!
//! # Invariants
//! - A `Cat` always carries exactly `name`, `age` and `breed`.
//! - `name` is a lookup key by convention only; it is never unique.

pub mod cat;

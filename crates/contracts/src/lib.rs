//! Shared contracts between the admin frontend and the REST backend.
//!
//! Wire types mirror the backend JSON exactly (camelCase fields, `success`
//! envelopes). Pure business derivations (priority ordering, inventory
//! reconciliation, status workflow) also live here so they stay DOM-free
//! and host-testable.

pub mod domain;

//! sea-orm entities for the squares service tables.

pub mod audit_log;
pub mod entries;
pub mod games;
pub mod winners;

//! Core engine: per-year attribute derivation, the multi-criteria filter,
//! manual/zodiac reconciliation and the draw-data source.
//!
//! Pure modules ([`deriver`], [`criteria`], [`filter`], [`reconcile`],
//! [`session`]) never touch the network. Only [`source`] performs I/O.

pub mod criteria;
pub mod deriver;
pub mod filter;
pub mod reconcile;
pub mod session;
pub mod source;

//! Board state engine.
//!
//! Lists hold ordered cards, cards hold comments, and every mutation goes
//! through the pure transition function [`domain::apply`]. The module follows
//! hexagonal architecture:
//!
//! - Domain types and the transition function in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The session service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod tests;

//! Node Directory
//!
//! The presence service that maps a user identifier to the node currently
//! serving that user, and reports the set of live node ids. It is an external
//! collaborator: the resolver only consumes the `NodeDirectory` boundary.
//! Answers are point-in-time and may already be stale when a remote call lands.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

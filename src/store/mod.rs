//! Durable Store Access
//!
//! The durable document store is an external collaborator. This module only
//! defines the narrow key-value boundary the resolver needs and the adapter
//! that maps profiles onto it.
//!
//! ## Submodules
//! - **`document`**: The `DocumentStore` boundary (`load` / `save` by collection
//!   and key) and an in-process `MemoryDocumentStore`.
//! - **`adapter`**: `ProfileStore`, which turns profiles into documents and back
//!   through the configured `ProfileKind`.

pub mod adapter;
pub mod document;

#[cfg(test)]
mod tests;

//! Profile Model
//!
//! A profile is a user's state record, identified by a UUID and carrying an
//! opaque JSON payload. Identity is by identifier alone.
//!
//! ## Submodules
//! - **`types`**: `ProfileId`, `Profile` and the stored `Document` shape.
//! - **`kind`**: The `ProfileKind` hooks a concrete profile flavour provides
//!   (create, update, pull) and the plain JSON default.

pub mod kind;
pub mod types;

//! # Distobj Client
//! The client side of a distributed-object session: tracks the network clock
//! and runs callbacks once the objects a caller depends on have materialized.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use distobj_shared as shared;

mod error;
mod related_objects;
mod repository;

pub use error::RelatedObjectError;
pub use related_objects::{
    object_host::{ObjectDirectory, RelatedObjectHost},
    related_object_manager::{RelatedObjectManager, RequestHandle},
    request_callbacks::RequestCallbacks,
};
pub use repository::ClientRepository;

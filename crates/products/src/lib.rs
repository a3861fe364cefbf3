//! Products domain module.
//!
//! The product record shared by the wire format and the backing table. Pure
//! data + decoding rules (no IO, no HTTP, no storage).

pub mod product;

pub use product::{Product, ProductDraft, ProductId};

//! # ludi-core
//!
//! Normalized content types and price calculation for the LudiTools site.
//!
//! This crate provides the stable internal model shared by every consumer:
//! - Entity structs for catalog and landing content (games, facilitators,
//!   schedule entries, testimonials) and their embedded media
//! - The opaque [`ContentId`] assigned by the content API
//! - The display price calculator ([`calculate_price`])
//!
//! Nothing here performs I/O. Raw API payloads are mapped into these types by
//! `ludi-content`.

pub mod entities;
pub mod enums;
pub mod ids;
pub mod pricing;

pub use enums::FacilitatorSource;
pub use ids::ContentId;
pub use pricing::{ComputedPrice, calculate_price};

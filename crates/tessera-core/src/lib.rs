//! Tessera Core Types and Definitions
//!
//! This crate provides the foundational types for the Tessera gallery
//! layout engine. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Item**: The validated image model ([`item`] module)
//! - **Layout**: The computed layout result ([`layout`] module)

pub mod geometry;
pub mod item;
pub mod layout;

//! # pitchcraft-core
//!
//! Core types and error types for Pitchcraft.
//!
//! This crate provides the foundational types shared across all Pitchcraft crates:
//! - The `StartupData` input record and the `GeneratedPitch` output record
//! - The industry tag enum used for competitor selection
//! - Display sections with their copy-ready text rendering
//! - Editable form state that produces a `StartupData` on submit
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod form;

//! Inventory records for the skim structural lexer.
//!
//! A [`Source`] is the shallow inventory of one file: functions, types with
//! their methods, enums with their variants, traits, already-marked tests and
//! unsafe blocks, each with the exact [`Span`] it occupies. Records are plain
//! data; consumers read them directly.
//!
//! # Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for every record.

mod audit;
mod items;
mod source;
mod span;

pub use audit::UnsafeAudit;
pub use items::{Enum, Function, TestMarker, Trait, TypeDecl, UnsafeBlock};
pub use skim_lexer_core::Position;
pub use source::{Source, SourceBuilder};
pub use span::Span;

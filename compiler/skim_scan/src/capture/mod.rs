//! Capture routines, one per declaration kind.
//!
//! Each routine is entered right after its introducing keyword (or the `#`
//! of a test attribute), owns the scanner for the duration of the call, and
//! returns with the cursor past the construct. Every routine is total:
//! truncated input yields whatever was accumulated.

mod block_items;
mod enums;
mod function;
mod impl_block;
mod structs;
mod test_marker;
mod traits;
mod unsafe_block;

pub(crate) use enums::capture_enum;
pub(crate) use function::capture_function;
pub(crate) use impl_block::capture_impl;
pub(crate) use structs::capture_struct;
pub(crate) use test_marker::capture_test;
pub(crate) use traits::capture_trait;
pub(crate) use unsafe_block::capture_unsafe;

/// The type and trait a function is declared under.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Owner<'o> {
    pub(crate) type_name: Option<&'o str>,
    pub(crate) trait_name: Option<&'o str>,
}

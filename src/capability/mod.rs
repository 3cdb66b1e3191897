//! Reusable behavior bundles attached to resource kinds
//!
//! A capability is a stateless bundle of serialization or resolution
//! behavior shared by several otherwise unrelated kinds. Attachment is
//! static: a kind opts in by implementing the capability trait and wiring
//! the field codecs into its serde derive.

pub mod hierarchical;
pub mod timestamped;

pub use hierarchical::{Hierarchical, ParentLookup, PendingParent};
pub use timestamped::TimeStamped;

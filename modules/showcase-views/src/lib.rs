//! The two presentation surfaces over the portfolio backend.
//!
//! [`PublicView`] is read-only and never renders empty: any load failure swaps
//! in the built-in sample content. [`AdminView`] keeps mutable drafts, issues
//! writes, and reconciles its local state with what the backend reports.
//! The views share nothing; they stay consistent only by re-fetching.

pub mod admin;
pub mod public;
pub mod status;
pub mod traits;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use admin::{AdminSnapshot, AdminView};
pub use public::{load_public_content, ContentSource, PublicContent, PublicState, PublicView};
pub use status::{Status, StatusSlot};
pub use traits::ContentStore;

//! Presence-tracking fields for partial updates.
//!
//! A PATCH body has three intents per field: leave it alone, set it, or clear it.
//! `Option<T>` can only express two of them, because a missing key and an explicit
//! `null` both deserialize to `None`. [`PatchField<T>`] keeps the distinction:
//!
//! | payload              | `PatchField<T>`            |
//! |----------------------|----------------------------|
//! | key absent           | `PatchField::NotProvided`  |
//! | `"key": null`        | `PatchField::Provided(None)` |
//! | `"key": value`       | `PatchField::Provided(Some(value))` |
//!
//! ## Binding
//!
//! Request types annotate every patch field with `#[serde(default)]`, so that a
//! missing key falls back to `NotProvided`, and implement [`ApplyPatch`] by
//! calling [`PatchField::if_provided`] (or [`PatchField::assign_to`]) once per field.
//!
//! ```
//! use patch_field::{ApplyPatch, PatchField};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Default)]
//! struct Profile {
//!     nickname: Option<String>,
//!     bio: Option<String>,
//! }
//!
//! #[derive(Deserialize)]
//! struct ProfilePatch {
//!     #[serde(default)]
//!     nickname: PatchField<String>,
//!     #[serde(default)]
//!     bio: PatchField<String>,
//! }
//!
//! impl ApplyPatch<Profile> for ProfilePatch {
//!     fn apply_to(self, target: &mut Profile) {
//!         self.nickname.assign_to(&mut target.nickname);
//!         self.bio.assign_to(&mut target.bio);
//!     }
//!
//!     fn is_empty(&self) -> bool {
//!         self.nickname.is_not_provided() && self.bio.is_not_provided()
//!     }
//! }
//!
//! let mut profile = Profile {
//!     nickname: Some("neo".to_owned()),
//!     bio: Some("follows the white rabbit".to_owned()),
//! };
//!
//! let patch: ProfilePatch = serde_json::from_str(r#"{"bio": null}"#).unwrap();
//! patch.apply_to(&mut profile);
//!
//! assert_eq!(profile.nickname.as_deref(), Some("neo"));
//! assert_eq!(profile.bio, None);
//! ```

mod apply;
mod error;
mod field;
mod serde_impl;

pub use apply::ApplyPatch;
pub use error::PatchFieldError;
pub use field::PatchField;

//! Users SDK
//!
//! Transport-agnostic contract of the users module: the [`UsersApi`] trait, the
//! models it exchanges and the [`UsersError`] it reports.

pub mod api;
pub mod errors;
pub mod models;

pub use api::UsersApi;
pub use errors::UsersError;
pub use models::{NewUser, User, UserPatch};

pub use patch_field::{ApplyPatch, PatchField};

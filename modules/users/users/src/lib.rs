//! Users Module Implementation
//!
//! The public API is defined in `users-sdk` and re-exported here.

pub use users_sdk::{NewUser, User, UserPatch, UsersApi, UsersError};

pub mod config;
pub use config::UsersConfig;

pub mod module;
pub use module::UsersModule;

pub mod local_client;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;

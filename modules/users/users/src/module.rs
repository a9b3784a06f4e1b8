use std::sync::Arc;

use axum::Router;
use tracing::info;
use users_sdk::UsersApi;

use crate::api::rest::routes;
use crate::config::UsersConfig;
use crate::domain::repo::UsersRepository;
use crate::domain::service::{Service, ServiceConfig};
use crate::infra::storage::InMemoryUsersRepository;
use crate::local_client::LocalClient;

/// Wiring of the users module: the domain service plus the surfaces built on it.
pub struct UsersModule {
    service: Arc<Service>,
}

impl UsersModule {
    #[must_use]
    pub fn new(config: &UsersConfig, repo: Arc<dyn UsersRepository>) -> Self {
        let service_config = ServiceConfig {
            max_field_length: config.max_field_length,
        };
        info!(
            max_field_length = config.max_field_length,
            "Users module initialized"
        );
        Self {
            service: Arc::new(Service::new(repo, service_config)),
        }
    }

    /// Module backed by process-local storage.
    #[must_use]
    pub fn in_memory(config: &UsersConfig) -> Self {
        Self::new(config, Arc::new(InMemoryUsersRepository::new()))
    }

    /// REST routes under `/users/v1`.
    pub fn router(&self) -> Router {
        info!("Registering users REST routes");
        routes::router(self.service.clone())
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn UsersApi> {
        Arc::new(LocalClient::new(self.service.clone()))
    }
}

//! Per-run backend state
//!
//! One `AppState` is built at startup and handed to every handler through
//! axum's `State`. Nothing is global: a fresh process or a fresh
//! `create_initial_state` call gives a fresh backend.

use std::sync::Arc;

use crate::adapters::{
    InMemoryOrderRepository, InMemorySessionRepository, InMemoryUserRepository, OrderJwtSigner,
    RandomTokenGenerator, SequentialTokenGenerator,
};
use crate::app::{AuthService, CatalogService, OrderService, UserService};
use crate::config::{Config, TokenStrategy};
use crate::domain::entities::{NewUser, Role, RoleAssignment};
use crate::domain::ports::{TokenGenerator, UserRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<InMemoryUserRepository, InMemorySessionRepository>>,
    pub user_service: Arc<UserService<InMemoryUserRepository, InMemorySessionRepository>>,
    pub catalog_service: Arc<CatalogService>,
    pub order_service: Arc<OrderService<InMemoryOrderRepository>>,
    pub config: Config,
}

/// Build a fresh backend seeded with the configured admin as user "1"
///
/// Seeding does not log the admin in.
pub async fn create_initial_state(config: &Config) -> anyhow::Result<AppState> {
    let tokens: Arc<dyn TokenGenerator> = match config.token_strategy {
        TokenStrategy::Random => Arc::new(RandomTokenGenerator),
        TokenStrategy::Sequential => Arc::new(SequentialTokenGenerator::new()),
    };

    let user_repo = Arc::new(InMemoryUserRepository::new());
    let session_repo = Arc::new(InMemorySessionRepository::new());
    let order_repo = Arc::new(InMemoryOrderRepository::new());

    let admin = user_repo
        .create(&NewUser::new(
            &config.admin_name,
            &config.admin_email,
            &config.admin_password,
            vec![RoleAssignment::new(Role::Admin)],
        ))
        .await?;
    tracing::info!(user_id = %admin.id, email = %admin.email, "Seeded admin user");

    let signer = OrderJwtSigner::new(&config.order_signing_secret)
        .map_err(|e| anyhow::anyhow!("Invalid order signing secret: {}", e))?;

    let auth_service = Arc::new(AuthService::new(
        user_repo.clone(),
        session_repo.clone(),
        tokens,
    ));
    let user_service = Arc::new(UserService::new(user_repo.clone(), auth_service.clone()));
    let catalog_service = Arc::new(CatalogService::new(&admin.sanitized()));
    let order_service = Arc::new(OrderService::new(order_repo, signer));

    Ok(AppState {
        auth_service,
        user_service,
        catalog_service,
        order_service,
        config: config.clone(),
    })
}

//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::route_repository::{InMemoryRouteStore, RouteStore};
use crate::repositories::user_repository::{InMemoryUserStore, UserStore};
use crate::services::advisor_service::{RouteAdvisor, StaticRouteAdvisor};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub routes: Arc<dyn RouteStore>,
    pub users: Arc<dyn UserStore>,
    pub advisor: Arc<dyn RouteAdvisor>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self::with_stores(
            config,
            Arc::new(InMemoryRouteStore::new()),
            Arc::new(InMemoryUserStore::new()),
            Arc::new(StaticRouteAdvisor),
        )
    }

    /// Construir el estado con implementaciones inyectadas de los almacenes
    pub fn with_stores(
        config: EnvironmentConfig,
        routes: Arc<dyn RouteStore>,
        users: Arc<dyn UserStore>,
        advisor: Arc<dyn RouteAdvisor>,
    ) -> Self {
        Self {
            config,
            routes,
            users,
            advisor,
        }
    }
}

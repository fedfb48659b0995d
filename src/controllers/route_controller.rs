use futures::future::join_all;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::ApiResponse;
use crate::dto::route_dto::{
    CreateRouteRequest, RouteResponse, SearchRouteResponse, SearchRoutesQuery, UpdateRouteRequest,
};
use crate::models::route::Route;
use crate::models::user::{User, UserRole};
use crate::repositories::route_repository::RouteStore;
use crate::repositories::user_repository::UserStore;
use crate::utils::errors::{forbidden_error, not_found_error, AppError};

pub struct RouteController {
    routes: Arc<dyn RouteStore>,
    users: Arc<dyn UserStore>,
}

impl RouteController {
    pub fn new(routes: Arc<dyn RouteStore>, users: Arc<dyn UserStore>) -> Self {
        Self { routes, users }
    }

    // Sólo los conductores administran su inventario de rutas
    async fn require_driver(&self, driver_id: Uuid) -> Result<User, AppError> {
        let user = self
            .users
            .find_by_id(driver_id)
            .await?
            .ok_or_else(|| not_found_error("Driver", &driver_id.to_string()))?;

        if user.role != UserRole::Driver {
            return Err(forbidden_error("manage routes", "user is not a driver"));
        }

        Ok(user)
    }

    pub async fn create(
        &self,
        driver_id: Uuid,
        request: CreateRouteRequest,
    ) -> Result<ApiResponse<RouteResponse>, AppError> {
        // Validar campos
        request.validate()?;

        // Verificar que el dueño exista y sea conductor
        self.require_driver(driver_id).await?;

        let route = Route::new(
            driver_id,
            request.origin,
            request.destination,
            request.departure_time,
            request.cost_per_seat,
            request.total_seats,
            request.dates,
        );
        let saved = self.routes.insert(route).await?;

        info!(
            "🚌 Ruta creada: {} a {}, {} fechas",
            saved.origin,
            saved.destination,
            saved.schedule.len()
        );

        Ok(ApiResponse::success_with_message(
            RouteResponse::from(saved),
            "Ruta creada exitosamente".to_string(),
        ))
    }

    pub async fn list_by_driver(&self, driver_id: Uuid) -> Result<Vec<RouteResponse>, AppError> {
        self.require_driver(driver_id).await?;

        let routes = self.routes.find_by_driver(driver_id).await?;
        Ok(routes.into_iter().map(RouteResponse::from).collect())
    }

    pub async fn update(
        &self,
        driver_id: Uuid,
        route_id: Uuid,
        request: UpdateRouteRequest,
    ) -> Result<ApiResponse<RouteResponse>, AppError> {
        // Validar campos
        request.validate()?;

        self.require_driver(driver_id).await?;

        let updated = self
            .routes
            .update(driver_id, route_id, request.into_edit())
            .await?;

        info!("🚌 Ruta {} actualizada", route_id);

        Ok(ApiResponse::success_with_message(
            RouteResponse::from(updated),
            "Ruta actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, driver_id: Uuid, route_id: Uuid) -> Result<(), AppError> {
        self.require_driver(driver_id).await?;

        self.routes.remove(driver_id, route_id).await?;

        info!("🚌 Ruta {} eliminada", route_id);
        Ok(())
    }

    pub async fn search(
        &self,
        query: SearchRoutesQuery,
    ) -> Result<Vec<SearchRouteResponse>, AppError> {
        let routes = self.routes.search(&query.from, &query.to).await?;

        info!(
            "🔍 Búsqueda de rutas de '{}' a '{}': {} resultados",
            query.from,
            query.to,
            routes.len()
        );

        // Enriquecer cada resultado con el nombre del conductor
        let enriched = join_all(routes.into_iter().map(|route| {
            let users = Arc::clone(&self.users);
            async move {
                let driver_name = users
                    .find_by_id(route.driver_id)
                    .await?
                    .map(|user| user.full_name)
                    .unwrap_or_else(|| "Unknown driver".to_string());
                Ok::<_, AppError>(SearchRouteResponse::from_route(route, driver_name))
            }
        }))
        .await;

        enriched.into_iter().collect()
    }
}

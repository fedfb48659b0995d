use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::models::booking::{RouteBookings, SeatBooking};
use crate::models::route::{Route, RouteEdit};
use crate::utils::errors::{not_found_error, AppError};

/// Reserva ya validada por el servicio, lista para confirmar
#[derive(Debug, Clone)]
pub struct SeatCommit {
    pub dates: BTreeSet<NaiveDate>,
    pub seats_per_date: u32,
    pub passenger_name: String,
}

#[async_trait::async_trait]
pub trait RouteStore: Send + Sync {
    async fn insert(&self, route: Route) -> Result<Route, AppError>;

    async fn find_by_driver(&self, driver_id: Uuid) -> Result<Vec<Route>, AppError>;

    /// Buscar rutas por origen y destino, en orden de publicación
    async fn search(
        &self,
        origin_query: &str,
        destination_query: &str,
    ) -> Result<Vec<Route>, AppError>;

    async fn update(
        &self,
        driver_id: Uuid,
        route_id: Uuid,
        edit: RouteEdit,
    ) -> Result<Route, AppError>;

    async fn remove(&self, driver_id: Uuid, route_id: Uuid) -> Result<(), AppError>;

    /// Confirmar una reserva de forma atómica y devolver la ruta actualizada
    async fn commit_booking(
        &self,
        driver_id: Uuid,
        route_id: Uuid,
        commit: &SeatCommit,
    ) -> Result<Route, AppError>;

    async fn bookings_for_route(
        &self,
        driver_id: Uuid,
        route_id: Uuid,
    ) -> Result<RouteBookings, AppError>;
}

// Entrada del almacén: la ruta, su libro de reservas y la bandera live
// que detecta rutas eliminadas con operaciones en vuelo.
struct RouteEntry {
    route: Route,
    ledger: RouteBookings,
    live: bool,
}

#[derive(Default)]
struct Inner {
    entries: HashMap<Uuid, Arc<Mutex<RouteEntry>>>,
    order: Vec<Uuid>,
}

/// Almacén de rutas en memoria con exclusión mutua por ruta.
///
/// Cada ruta vive detrás de su propio Mutex: dos reservas sobre la misma
/// ruta se serializan, mientras que rutas distintas avanzan en paralelo.
/// El índice sólo se bloquea para resolver handles y altas/bajas.
pub struct InMemoryRouteStore {
    inner: RwLock<Inner>,
}

impl InMemoryRouteStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    // Resolver el handle de una ruta sin retener el lock del índice
    async fn entry_handle(&self, route_id: Uuid) -> Result<Arc<Mutex<RouteEntry>>, AppError> {
        let inner = self.inner.read().await;
        inner
            .entries
            .get(&route_id)
            .cloned()
            .ok_or_else(|| not_found_error("Route", &route_id.to_string()))
    }

    // Handles de todas las rutas en orden de publicación
    async fn handles_in_order(&self) -> Vec<Arc<Mutex<RouteEntry>>> {
        let inner = self.inner.read().await;
        inner
            .order
            .iter()
            .filter_map(|id| inner.entries.get(id).cloned())
            .collect()
    }

    // Confirmación sobre un handle ya resuelto. Una entrada con live en
    // false fue eliminada entre la resolución del handle y este lock.
    async fn commit_on_entry(
        entry: &Arc<Mutex<RouteEntry>>,
        driver_id: Uuid,
        route_id: Uuid,
        commit: &SeatCommit,
    ) -> Result<Route, AppError> {
        let mut guard = entry.lock().await;

        if !guard.live {
            return Err(AppError::Conflict(format!(
                "Route '{}' was deleted while the booking was in progress",
                route_id
            )));
        }
        if guard.route.driver_id != driver_id {
            return Err(not_found_error("Route", &route_id.to_string()));
        }

        guard.route.try_book(&commit.dates, commit.seats_per_date)?;

        for date in &commit.dates {
            guard.ledger.entry(*date).or_default().push(SeatBooking {
                passenger_name: commit.passenger_name.clone(),
                seats_booked: commit.seats_per_date,
            });
        }

        Ok(guard.route.clone())
    }
}

impl Default for InMemoryRouteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl RouteStore for InMemoryRouteStore {
    async fn insert(&self, route: Route) -> Result<Route, AppError> {
        let mut inner = self.inner.write().await;
        let id = route.id;
        inner.entries.insert(
            id,
            Arc::new(Mutex::new(RouteEntry {
                route: route.clone(),
                ledger: RouteBookings::new(),
                live: true,
            })),
        );
        inner.order.push(id);
        Ok(route)
    }

    async fn find_by_driver(&self, driver_id: Uuid) -> Result<Vec<Route>, AppError> {
        let mut routes = Vec::new();
        for entry in self.handles_in_order().await {
            let guard = entry.lock().await;
            if guard.live && guard.route.driver_id == driver_id {
                routes.push(guard.route.clone());
            }
        }
        Ok(routes)
    }

    async fn search(
        &self,
        origin_query: &str,
        destination_query: &str,
    ) -> Result<Vec<Route>, AppError> {
        let mut routes = Vec::new();
        for entry in self.handles_in_order().await {
            let guard = entry.lock().await;
            if guard.live && guard.route.matches(origin_query, destination_query) {
                routes.push(guard.route.clone());
            }
        }
        Ok(routes)
    }

    async fn update(
        &self,
        driver_id: Uuid,
        route_id: Uuid,
        edit: RouteEdit,
    ) -> Result<Route, AppError> {
        let entry = self.entry_handle(route_id).await?;
        let mut guard = entry.lock().await;

        if !guard.live {
            return Err(not_found_error("Route", &route_id.to_string()));
        }
        // Verificar que la ruta pertenece al conductor
        if guard.route.driver_id != driver_id {
            return Err(AppError::Forbidden(
                "Route does not belong to this driver".to_string(),
            ));
        }

        guard.route.apply_edit(edit);
        Ok(guard.route.clone())
    }

    async fn remove(&self, driver_id: Uuid, route_id: Uuid) -> Result<(), AppError> {
        let entry = self.entry_handle(route_id).await?;
        {
            let mut guard = entry.lock().await;

            if !guard.live {
                return Err(not_found_error("Route", &route_id.to_string()));
            }
            if guard.route.driver_id != driver_id {
                return Err(AppError::Forbidden(
                    "Route does not belong to this driver".to_string(),
                ));
            }

            guard.live = false;
        }

        let mut inner = self.inner.write().await;
        inner.entries.remove(&route_id);
        inner.order.retain(|id| *id != route_id);
        Ok(())
    }

    async fn commit_booking(
        &self,
        driver_id: Uuid,
        route_id: Uuid,
        commit: &SeatCommit,
    ) -> Result<Route, AppError> {
        let entry = self.entry_handle(route_id).await?;
        Self::commit_on_entry(&entry, driver_id, route_id, commit).await
    }

    async fn bookings_for_route(
        &self,
        driver_id: Uuid,
        route_id: Uuid,
    ) -> Result<RouteBookings, AppError> {
        let entry = self.entry_handle(route_id).await?;
        let guard = entry.lock().await;

        if !guard.live {
            return Err(not_found_error("Route", &route_id.to_string()));
        }
        if guard.route.driver_id != driver_id {
            return Err(AppError::Forbidden(
                "Route does not belong to this driver".to_string(),
            ));
        }

        Ok(guard.ledger.clone())
    }
}

//! Modelo de Route
//!
//! Este módulo contiene el struct Route con su inventario de asientos
//! por fecha y el protocolo de reserva validar-luego-confirmar.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

use crate::utils::errors::AppError;

/// Disponibilidad de asientos para una fecha concreta
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    pub weekday: String,
    pub available_seats: u32,
}

impl ScheduleEntry {
    /// Crear una entrada con la etiqueta de día derivada de la fecha
    pub fn new(date: NaiveDate, available_seats: u32) -> Self {
        Self {
            date,
            weekday: date.format("%a").to_string(),
            available_seats,
        }
    }
}

/// Cambios de una ruta enviados por su conductor
#[derive(Debug, Clone)]
pub struct RouteEdit {
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
    pub cost_per_seat: Decimal,
    pub total_seats: u32,
    pub dates: Vec<NaiveDate>,
}

/// Ruta publicada por un conductor con su inventario de asientos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
    pub cost_per_seat: Decimal,
    pub total_seats: u32,
    pub schedule: BTreeMap<NaiveDate, ScheduleEntry>,
    pub created_at: DateTime<Utc>,
}

impl Route {
    /// Crear una ruta nueva con todas las fechas a capacidad completa
    pub fn new(
        driver_id: Uuid,
        origin: String,
        destination: String,
        departure_time: String,
        cost_per_seat: Decimal,
        total_seats: u32,
        dates: Vec<NaiveDate>,
    ) -> Self {
        let schedule = dates
            .into_iter()
            .map(|date| (date, ScheduleEntry::new(date, total_seats)))
            .collect();

        Self {
            id: Uuid::new_v4(),
            driver_id,
            origin,
            destination,
            departure_time,
            cost_per_seat,
            total_seats,
            schedule,
            created_at: Utc::now(),
        }
    }

    /// Verificar si la ruta coincide con una búsqueda origen/destino.
    /// Ambos términos se comparan como substring sin distinguir mayúsculas;
    /// un término vacío coincide con cualquier valor.
    pub fn matches(&self, origin_query: &str, destination_query: &str) -> bool {
        self.origin
            .to_lowercase()
            .contains(&origin_query.to_lowercase())
            && self
                .destination
                .to_lowercase()
                .contains(&destination_query.to_lowercase())
    }

    /// Reservar asientos en todas las fechas indicadas, o en ninguna.
    ///
    /// Primero se validan todas las fechas; sólo si todas tienen capacidad
    /// se descuentan los asientos. Un fallo en cualquier fecha deja el
    /// inventario exactamente como estaba.
    pub fn try_book(&mut self, dates: &BTreeSet<NaiveDate>, seats: u32) -> Result<(), AppError> {
        // Validar todas las fechas antes de modificar nada
        for date in dates {
            let entry = self
                .schedule
                .get(date)
                .ok_or(AppError::DateNotOffered(*date))?;

            if entry.available_seats < seats {
                return Err(AppError::InsufficientSeats {
                    date: *date,
                    requested: seats,
                    available: entry.available_seats,
                });
            }
        }

        // Todas las fechas tienen capacidad, descontar
        for date in dates {
            if let Some(entry) = self.schedule.get_mut(date) {
                entry.available_seats -= seats;
            }
        }

        Ok(())
    }

    /// Aplicar una edición del conductor reconstruyendo el calendario.
    ///
    /// Una fecha que ya existía conserva sus asientos disponibles (las
    /// reservas hechas no reaparecen), acotados al nuevo total. Una fecha
    /// nueva arranca a capacidad completa. Las fechas no incluidas se
    /// eliminan.
    pub fn apply_edit(&mut self, edit: RouteEdit) {
        let RouteEdit {
            origin,
            destination,
            departure_time,
            cost_per_seat,
            total_seats,
            dates,
        } = edit;

        let mut schedule = BTreeMap::new();
        for date in dates {
            let available = match self.schedule.get(&date) {
                Some(existing) => existing.available_seats.min(total_seats),
                None => total_seats,
            };
            schedule.insert(date, ScheduleEntry::new(date, available));
        }

        self.origin = origin;
        self.destination = destination;
        self.departure_time = departure_time;
        self.cost_per_seat = cost_per_seat;
        self.total_seats = total_seats;
        self.schedule = schedule;
    }

    /// Asientos disponibles en una fecha, si la ruta opera ese día
    pub fn available_on(&self, date: NaiveDate) -> Option<u32> {
        self.schedule.get(&date).map(|entry| entry.available_seats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn selection(dates: &[NaiveDate]) -> BTreeSet<NaiveDate> {
        dates.iter().copied().collect()
    }

    fn sample_route(total_seats: u32, dates: Vec<NaiveDate>) -> Route {
        Route::new(
            Uuid::new_v4(),
            "Peenya Industrial Area".to_string(),
            "Majestic Bus Stand".to_string(),
            "08:00 AM".to_string(),
            Decimal::from(50),
            total_seats,
            dates,
        )
    }

    #[test]
    fn test_new_seeds_full_schedule() {
        let route = sample_route(12, vec![date(10), date(11)]);

        assert_eq!(route.schedule.len(), 2);
        let monday = &route.schedule[&date(10)];
        assert_eq!(monday.weekday, "Mon");
        assert_eq!(monday.available_seats, 12);
        assert_eq!(route.schedule[&date(11)].weekday, "Tue");
    }

    #[test]
    fn test_new_dedupes_dates() {
        let route = sample_route(12, vec![date(10), date(10), date(11)]);
        assert_eq!(route.schedule.len(), 2);
    }

    #[test]
    fn test_matches_is_case_insensitive_substring_on_both_ends() {
        let route = sample_route(12, vec![date(10)]);

        assert!(route.matches("peenya", "majestic"));
        assert!(route.matches("PEENYA INDUSTRIAL", "Bus Stand"));
        assert!(route.matches("", ""));
        assert!(!route.matches("peenya", "marathahalli"));
        assert!(!route.matches("electronic", "majestic"));
    }

    #[test]
    fn test_try_book_decrements_only_selected_dates() {
        let mut route = sample_route(12, vec![date(10), date(11)]);

        route.try_book(&selection(&[date(10)]), 3).unwrap();

        assert_eq!(route.available_on(date(10)), Some(9));
        assert_eq!(route.available_on(date(11)), Some(12));
    }

    #[test]
    fn test_try_book_insufficient_seats_rolls_back_everything() {
        let mut route = sample_route(12, vec![date(10), date(11)]);
        route.try_book(&selection(&[date(11)]), 10).unwrap();

        // date(11) sólo tiene 2 asientos, la reserva completa debe fallar
        let err = route
            .try_book(&selection(&[date(10), date(11)]), 5)
            .unwrap_err();

        match err {
            AppError::InsufficientSeats {
                date: day,
                requested,
                available,
            } => {
                assert_eq!(day, date(11));
                assert_eq!(requested, 5);
                assert_eq!(available, 2);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(route.available_on(date(10)), Some(12));
        assert_eq!(route.available_on(date(11)), Some(2));
    }

    #[test]
    fn test_try_book_unknown_date_changes_nothing() {
        let mut route = sample_route(12, vec![date(10)]);

        let err = route
            .try_book(&selection(&[date(10), date(12)]), 1)
            .unwrap_err();

        assert!(matches!(err, AppError::DateNotOffered(day) if day == date(12)));
        assert_eq!(route.available_on(date(10)), Some(12));
    }

    #[test]
    fn test_try_book_can_empty_a_date_exactly() {
        let mut route = sample_route(12, vec![date(10)]);

        route.try_book(&selection(&[date(10)]), 12).unwrap();
        assert_eq!(route.available_on(date(10)), Some(0));

        let err = route.try_book(&selection(&[date(10)]), 1).unwrap_err();
        assert!(matches!(
            err,
            AppError::InsufficientSeats { available: 0, .. }
        ));
    }

    #[test]
    fn test_booking_example_two_seats_then_eleven() {
        let mut route = sample_route(12, vec![date(10)]);

        route.try_book(&selection(&[date(10)]), 2).unwrap();
        assert_eq!(route.available_on(date(10)), Some(10));

        let err = route.try_book(&selection(&[date(10)]), 11).unwrap_err();
        assert!(matches!(
            err,
            AppError::InsufficientSeats {
                requested: 11,
                available: 10,
                ..
            }
        ));
        assert_eq!(route.available_on(date(10)), Some(10));
    }

    #[test]
    fn test_apply_edit_preserves_kept_dates_and_seeds_new_ones() {
        let mut route = sample_route(12, vec![date(10), date(11)]);
        route.try_book(&selection(&[date(10)]), 4).unwrap();

        route.apply_edit(RouteEdit {
            origin: "Peenya".to_string(),
            destination: "Majestic".to_string(),
            departure_time: "08:30 AM".to_string(),
            cost_per_seat: Decimal::from(55),
            total_seats: 12,
            dates: vec![date(10), date(12)],
        });

        // la fecha conservada mantiene sus asientos vendidos
        assert_eq!(route.available_on(date(10)), Some(8));
        // la fecha nueva arranca a capacidad completa
        assert_eq!(route.available_on(date(12)), Some(12));
        // la fecha no seleccionada desaparece
        assert_eq!(route.available_on(date(11)), None);
        assert_eq!(route.departure_time, "08:30 AM");
        assert_eq!(route.cost_per_seat, Decimal::from(55));
    }

    #[test]
    fn test_apply_edit_clamps_preserved_seats_to_new_total() {
        let mut route = sample_route(12, vec![date(10)]);

        route.apply_edit(RouteEdit {
            origin: route.origin.clone(),
            destination: route.destination.clone(),
            departure_time: route.departure_time.clone(),
            cost_per_seat: route.cost_per_seat,
            total_seats: 4,
            dates: vec![date(10)],
        });

        assert_eq!(route.available_on(date(10)), Some(4));
        assert_eq!(route.total_seats, 4);
    }

    fn upcoming_dates(count: usize) -> Vec<NaiveDate> {
        (0..count)
            .map(|offset| date(10) + Duration::days(offset as i64))
            .collect()
    }

    proptest! {
        #[test]
        fn booking_touches_only_selected_dates(
            total in 1u32..=20,
            n_dates in 2usize..=8,
            seats in 1u32..=25,
            mask in 1u32..=255,
        ) {
            let dates = upcoming_dates(n_dates);
            let mut route = sample_route(total, dates.clone());

            let mut picked: BTreeSet<NaiveDate> = dates
                .iter()
                .enumerate()
                .filter(|(i, _)| (mask >> i) & 1 == 1)
                .map(|(_, d)| *d)
                .collect();
            if picked.is_empty() {
                picked.insert(dates[0]);
            }

            let result = route.try_book(&picked, seats);

            if seats <= total {
                prop_assert!(result.is_ok());
                for (day, entry) in &route.schedule {
                    let expected = if picked.contains(day) { total - seats } else { total };
                    prop_assert_eq!(entry.available_seats, expected);
                }
            } else {
                prop_assert!(
                    matches!(result, Err(AppError::InsufficientSeats { .. })),
                    "expected InsufficientSeats, got {:?}",
                    result
                );
                for entry in route.schedule.values() {
                    prop_assert_eq!(entry.available_seats, total);
                }
            }
        }

        #[test]
        fn failed_booking_leaves_schedule_untouched(
            total in 2u32..=20,
            n_dates in 2usize..=8,
            drained_index in 0usize..8,
        ) {
            let dates = upcoming_dates(n_dates);
            let mut route = sample_route(total, dates.clone());

            // dejar una fecha con un asiento menos que la petición
            let drained = dates[drained_index % n_dates];
            route.try_book(&selection(&[drained]), 1).unwrap();

            let before: Vec<u32> = route
                .schedule
                .values()
                .map(|entry| entry.available_seats)
                .collect();

            let all: BTreeSet<NaiveDate> = dates.iter().copied().collect();
            let result = route.try_book(&all, total);

            prop_assert!(
                matches!(result, Err(AppError::InsufficientSeats { .. })),
                "expected InsufficientSeats, got {:?}",
                result
            );
            let after: Vec<u32> = route
                .schedule
                .values()
                .map(|entry| entry.available_seats)
                .collect();
            prop_assert_eq!(before, after);
        }

        #[test]
        fn edit_preserves_sold_seats_clamped_to_new_total(
            total in 1u32..=20,
            new_total in 1u32..=20,
            n_dates in 1usize..=8,
            booked in 0u32..=20,
        ) {
            let dates = upcoming_dates(n_dates);
            let mut route = sample_route(total, dates.clone());

            let seats_booked = booked % (total + 1);
            if seats_booked >= 1 {
                route.try_book(&selection(&[dates[0]]), seats_booked).unwrap();
            }

            route.apply_edit(RouteEdit {
                origin: route.origin.clone(),
                destination: route.destination.clone(),
                departure_time: route.departure_time.clone(),
                cost_per_seat: route.cost_per_seat,
                total_seats: new_total,
                dates: dates.clone(),
            });

            prop_assert_eq!(
                route.available_on(dates[0]),
                Some((total - seats_booked).min(new_total))
            );
            for day in dates.iter().skip(1) {
                prop_assert_eq!(route.available_on(*day), Some(total.min(new_total)));
            }
        }
    }
}

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

// Request para reservar asientos en una o varias fechas.
// La lista de fechas se valida en el servicio para distinguir
// el caso "sin fechas" del resto de errores de entrada.
#[derive(Debug, Deserialize, Validate)]
pub struct BookDatesRequest {
    pub passenger_id: Uuid,

    pub dates: Vec<NaiveDate>,

    #[validate(range(min = 1))]
    pub seats_per_date: u32,
}

//! Flight catalog - read-only lookups over the `flights` table.

use crate::{
    db::DbPool,
    error::AppError,
    models::flight::{Flight, FlightQuery},
};

const FLIGHT_COLUMNS: &str = "id, flight_number, departure_airport, arrival_location, \
                              departure_time, arrival_time, cost_cents";

/// Find flights matching all three search criteria.
///
/// Airports match by case-insensitive equality (no wildcard expansion). The
/// date matches the calendar date of `departure_time`, ignoring the time of
/// day. No match is an empty list, not an error.
pub async fn search(pool: &DbPool, query: &FlightQuery) -> Result<Vec<Flight>, AppError> {
    let flights = sqlx::query_as::<_, Flight>(&format!(
        r#"
        SELECT {FLIGHT_COLUMNS}
        FROM flights
        WHERE departure_airport = ?1 COLLATE NOCASE
          AND arrival_location = ?2 COLLATE NOCASE
          AND date(departure_time) = ?3
        ORDER BY departure_time, id
        "#
    ))
    .bind(&query.departure_airport)
    .bind(&query.arrival_location)
    .bind(query.departure_date)
    .fetch_all(pool)
    .await?;

    tracing::debug!(matches = flights.len(), "flight search");

    Ok(flights)
}

/// Get a flight by ID.
pub async fn get_flight(pool: &DbPool, flight_id: i64) -> Result<Flight, AppError> {
    sqlx::query_as::<_, Flight>(&format!("SELECT {FLIGHT_COLUMNS} FROM flights WHERE id = ?1"))
        .bind(flight_id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::NotFound("Flight"))
}

/// Distinct airport codes appearing as a departure or an arrival, sorted.
pub async fn airport_codes(pool: &DbPool) -> Result<Vec<String>, AppError> {
    let codes = sqlx::query_scalar::<_, String>(
        r#"
        SELECT departure_airport FROM flights
        UNION
        SELECT arrival_location FROM flights
        ORDER BY 1
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{seed_sample_flights, test_pool};
    use chrono::NaiveDate;

    fn query(dep: &str, arr: &str, date: (i32, u32, u32)) -> FlightQuery {
        FlightQuery {
            departure_airport: dep.to_string(),
            arrival_location: arr.to_string(),
            departure_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        }
    }

    #[tokio::test]
    async fn search_matches_route_and_calendar_date() {
        let pool = test_pool().await;
        seed_sample_flights(&pool).await.unwrap();

        let flights = search(&pool, &query("JFK", "LAX", (2024, 11, 5))).await.unwrap();
        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].flight_number, "AB123");
        assert_eq!(flights[0].cost_cents, 29999);

        let next_day = search(&pool, &query("JFK", "LAX", (2024, 11, 6))).await.unwrap();
        assert!(next_day.is_empty());
    }

    #[tokio::test]
    async fn airport_comparison_ignores_case() {
        let pool = test_pool().await;
        seed_sample_flights(&pool).await.unwrap();

        let flights = search(&pool, &query("jfk", "sfo", (2024, 11, 6))).await.unwrap();
        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].flight_number, "CD456");
    }

    #[tokio::test]
    async fn airport_comparison_is_exact() {
        let pool = test_pool().await;
        seed_sample_flights(&pool).await.unwrap();

        for (dep, arr) in [("JF%", "LAX"), ("JFK", "LA_"), ("JFKX", "LAX"), ("LAX", "JFK")] {
            let flights = search(&pool, &query(dep, arr, (2024, 11, 5))).await.unwrap();
            assert!(flights.is_empty(), "{dep} -> {arr}");
        }
    }

    #[tokio::test]
    async fn get_flight_reports_missing_id() {
        let pool = test_pool().await;
        seed_sample_flights(&pool).await.unwrap();

        assert!(matches!(
            get_flight(&pool, 999).await,
            Err(AppError::NotFound("Flight"))
        ));
    }

    #[tokio::test]
    async fn airport_codes_cover_both_directions() {
        let pool = test_pool().await;
        seed_sample_flights(&pool).await.unwrap();

        let codes = airport_codes(&pool).await.unwrap();
        assert_eq!(codes, vec!["JFK", "LAX", "SFO"]);
    }
}

// src/db/repository.rs
// DOCUMENTATION: Database access layer - all SQL queries
// PURPOSE: Abstract database operations from business logic

use crate::errors::CafeError;
use crate::models::{Cafe, NewCafe};
use sqlx::SqlitePool;

const SELECT_CAFE: &str = r#"
    SELECT id, name, map_url, img_url, location, seats,
           has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price
    FROM cafe
"#;

/// CafeRepository: All database operations for cafes
/// DOCUMENTATION: Uses query_as for type-safe mapping onto Cafe
pub struct CafeRepository;

impl CafeRepository {
    /// Insert a new cafe and return its store-assigned id
    /// DOCUMENTATION: NULL columns and duplicate names are rejected by the store
    pub async fn create_cafe(pool: &SqlitePool, cafe: &NewCafe) -> Result<i64, CafeError> {
        let id = sqlx::query(
            r#"
            INSERT INTO cafe (
                name, map_url, img_url, location, seats,
                has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&cafe.name) // 1
        .bind(&cafe.map_url) // 2
        .bind(&cafe.img_url) // 3
        .bind(&cafe.location) // 4
        .bind(&cafe.seats) // 5
        .bind(cafe.has_toilet) // 6
        .bind(cafe.has_wifi) // 7
        .bind(cafe.has_sockets) // 8
        .bind(cafe.can_take_calls) // 9
        .bind(&cafe.coffee_price) // 10
        .execute(pool)
        .await?
        .last_insert_rowid();

        log::info!("Created cafe with id: {}", id);
        Ok(id)
    }

    /// Pick one row uniformly at random
    /// DOCUMENTATION: Used for GET /random; None when the table is empty
    pub async fn get_random(pool: &SqlitePool) -> Result<Option<Cafe>, CafeError> {
        let sql = format!("{} ORDER BY RANDOM() LIMIT 1", SELECT_CAFE);
        let cafe = sqlx::query_as::<_, Cafe>(&sql).fetch_optional(pool).await?;
        Ok(cafe)
    }

    /// Every row, in insertion order
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Cafe>, CafeError> {
        let sql = format!("{} ORDER BY id", SELECT_CAFE);
        let cafes = sqlx::query_as::<_, Cafe>(&sql).fetch_all(pool).await?;
        Ok(cafes)
    }

    /// Number of rows; doubles as a store liveness check
    pub async fn count(pool: &SqlitePool) -> Result<i64, CafeError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cafe")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Rows whose location equals `location` exactly (case-sensitive)
    pub async fn find_by_location(
        pool: &SqlitePool,
        location: &str,
    ) -> Result<Vec<Cafe>, CafeError> {
        let sql = format!("{} WHERE location = ? ORDER BY id", SELECT_CAFE);
        let cafes = sqlx::query_as::<_, Cafe>(&sql)
            .bind(location)
            .fetch_all(pool)
            .await?;
        Ok(cafes)
    }

    /// Retrieve cafe by ID
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Cafe, CafeError> {
        let sql = format!("{} WHERE id = ?", SELECT_CAFE);
        sqlx::query_as::<_, Cafe>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| {
                log::warn!("Cafe not found: {}", id);
                CafeError::NotFound(id)
            })
    }

    /// Set coffee_price on an existing cafe
    /// DOCUMENTATION: Existence check and update are one statement;
    /// returns the record as stored afterwards
    pub async fn update_price(
        pool: &SqlitePool,
        id: i64,
        new_price: Option<&str>,
    ) -> Result<Cafe, CafeError> {
        let rows = sqlx::query("UPDATE cafe SET coffee_price = ? WHERE id = ?")
            .bind(new_price)
            .bind(id)
            .execute(pool)
            .await?
            .rows_affected();

        if rows == 0 {
            log::warn!("Price update for unknown cafe: {}", id);
            return Err(CafeError::NotFound(id));
        }

        let cafe = Self::get_by_id(pool, id).await?;
        log::info!("Updated coffee price for cafe: {}", id);
        Ok(cafe)
    }

    /// Hard delete cafe
    pub async fn delete_cafe(pool: &SqlitePool, id: i64) -> Result<(), CafeError> {
        let rows = sqlx::query("DELETE FROM cafe WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?
            .rows_affected();

        if rows == 0 {
            log::warn!("Delete requested for unknown cafe: {}", id);
            return Err(CafeError::NotFound(id));
        }

        log::info!("Deleted cafe: {}", id);
        Ok(())
    }
}

/// Fully populated insert used by test modules
#[cfg(test)]
pub(crate) fn sample_cafe(name: &str, location: &str) -> NewCafe {
    NewCafe {
        name: Some(name.to_string()),
        map_url: Some(format!("https://maps.example/{}", name)),
        img_url: Some(format!("https://img.example/{}.jpg", name)),
        location: Some(location.to_string()),
        seats: Some("20-30".to_string()),
        has_toilet: true,
        has_wifi: true,
        has_sockets: false,
        can_take_calls: false,
        coffee_price: Some("£2.50".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::db::memory_pool;

    #[actix_rt::test]
    async fn test_create_and_get() {
        let pool = memory_pool().await;
        let id = CafeRepository::create_cafe(&pool, &sample_cafe("Costa", "London"))
            .await
            .unwrap();

        let cafe = CafeRepository::get_by_id(&pool, id).await.unwrap();
        assert_eq!(cafe.name, "Costa");
        assert_eq!(cafe.location, "London");
        assert!(cafe.has_toilet);
        assert!(!cafe.can_take_calls);
        assert_eq!(cafe.coffee_price.as_deref(), Some("£2.50"));
    }

    #[actix_rt::test]
    async fn test_duplicate_name_is_conflict() {
        let pool = memory_pool().await;
        CafeRepository::create_cafe(&pool, &sample_cafe("Costa", "London"))
            .await
            .unwrap();
        let err = CafeRepository::create_cafe(&pool, &sample_cafe("Costa", "Leeds"))
            .await
            .unwrap_err();
        assert!(matches!(err, CafeError::AlreadyExists(_)));
    }

    #[actix_rt::test]
    async fn test_missing_required_column_is_rejected() {
        let pool = memory_pool().await;
        let mut cafe = sample_cafe("Costa", "London");
        cafe.map_url = None;

        let err = CafeRepository::create_cafe(&pool, &cafe).await.unwrap_err();
        assert!(matches!(err, CafeError::DatabaseError(_)));
        assert!(CafeRepository::list_all(&pool).await.unwrap().is_empty());
    }

    #[actix_rt::test]
    async fn test_random_on_empty_table() {
        let pool = memory_pool().await;
        assert!(CafeRepository::get_random(&pool).await.unwrap().is_none());

        CafeRepository::create_cafe(&pool, &sample_cafe("Costa", "London"))
            .await
            .unwrap();
        let cafe = CafeRepository::get_random(&pool).await.unwrap().unwrap();
        assert_eq!(cafe.name, "Costa");
    }

    #[actix_rt::test]
    async fn test_find_by_location_is_exact() {
        let pool = memory_pool().await;
        for (name, loc) in [("A", "London"), ("B", "london"), ("C", "London"), ("D", "Leeds")] {
            CafeRepository::create_cafe(&pool, &sample_cafe(name, loc))
                .await
                .unwrap();
        }

        let names: Vec<String> = CafeRepository::find_by_location(&pool, "London")
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["A".to_string(), "C".to_string()]);
        assert!(CafeRepository::find_by_location(&pool, "Paris")
            .await
            .unwrap()
            .is_empty());
    }

    #[actix_rt::test]
    async fn test_update_price_touches_only_price() {
        let pool = memory_pool().await;
        let id = CafeRepository::create_cafe(&pool, &sample_cafe("Costa", "London"))
            .await
            .unwrap();
        let before = CafeRepository::get_by_id(&pool, id).await.unwrap();

        let after = CafeRepository::update_price(&pool, id, Some("£3.00"))
            .await
            .unwrap();
        let again = CafeRepository::update_price(&pool, id, Some("£3.00"))
            .await
            .unwrap();
        assert_eq!(after, again);

        assert_eq!(after.coffee_price.as_deref(), Some("£3.00"));
        assert_eq!(
            Cafe {
                coffee_price: before.coffee_price.clone(),
                ..after
            },
            before
        );
    }

    #[actix_rt::test]
    async fn test_update_and_delete_unknown_id() {
        let pool = memory_pool().await;
        for (name, loc) in [("Costa", "London"), ("Nero", "Leeds")] {
            CafeRepository::create_cafe(&pool, &sample_cafe(name, loc))
                .await
                .unwrap();
        }
        let before = CafeRepository::list_all(&pool).await.unwrap();
        assert_eq!(CafeRepository::count(&pool).await.unwrap(), 2);

        assert!(matches!(
            CafeRepository::update_price(&pool, 99, Some("£1")).await,
            Err(CafeError::NotFound(99))
        ));
        assert!(matches!(
            CafeRepository::delete_cafe(&pool, 99).await,
            Err(CafeError::NotFound(99))
        ));
        assert_eq!(CafeRepository::list_all(&pool).await.unwrap(), before);
    }

    #[actix_rt::test]
    async fn test_delete_removes_exactly_one_row() {
        let pool = memory_pool().await;
        let keep = CafeRepository::create_cafe(&pool, &sample_cafe("Keep", "London"))
            .await
            .unwrap();
        let gone = CafeRepository::create_cafe(&pool, &sample_cafe("Gone", "London"))
            .await
            .unwrap();

        CafeRepository::delete_cafe(&pool, gone).await.unwrap();

        let remaining = CafeRepository::list_all(&pool).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, keep);
        assert!(matches!(
            CafeRepository::delete_cafe(&pool, gone).await,
            Err(CafeError::NotFound(_))
        ));
    }
}

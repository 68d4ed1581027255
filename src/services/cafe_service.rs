// src/services/cafe_service.rs
// DOCUMENTATION: Business logic for cafes
// PURPOSE: Intermediary between handlers and repository, handles extra logic

use crate::db::CafeRepository;
use crate::errors::CafeError;
use crate::models::{AddCafeForm, Cafe};
use sqlx::SqlitePool;

pub struct CafeService;

impl CafeService {
    /// One cafe chosen at random
    pub async fn random_cafe(pool: &SqlitePool) -> Result<Cafe, CafeError> {
        CafeRepository::get_random(pool)
            .await?
            .ok_or(CafeError::EmptyCollection)
    }

    /// Every cafe in the directory
    pub async fn all_cafes(pool: &SqlitePool) -> Result<Vec<Cafe>, CafeError> {
        CafeRepository::list_all(pool).await
    }

    /// Cafes at exactly `location`
    /// DOCUMENTATION: An empty result is reported as an error so the
    /// handler answers 404; a missing location never matches
    pub async fn search_by_location(
        pool: &SqlitePool,
        location: Option<&str>,
    ) -> Result<Vec<Cafe>, CafeError> {
        let cafes = match location {
            Some(loc) => CafeRepository::find_by_location(pool, loc).await?,
            None => Vec::new(),
        };

        if cafes.is_empty() {
            return Err(CafeError::NoCafesAtLocation(
                location.unwrap_or_default().to_string(),
            ));
        }
        Ok(cafes)
    }

    /// Create a cafe from the submitted form
    pub async fn add_cafe(pool: &SqlitePool, form: AddCafeForm) -> Result<i64, CafeError> {
        let cafe = form.into_new_cafe();
        CafeRepository::create_cafe(pool, &cafe).await
    }

    /// Replace the coffee price of an existing cafe
    pub async fn update_price(
        pool: &SqlitePool,
        id: i64,
        new_price: Option<&str>,
    ) -> Result<Cafe, CafeError> {
        CafeRepository::update_price(pool, id, new_price).await
    }

    /// Delete a cafe once the caller proves knowledge of the API key
    /// DOCUMENTATION: The key is checked before any lookup so an
    /// unauthorized caller cannot probe which ids exist
    pub async fn report_closed(
        pool: &SqlitePool,
        configured_key: &str,
        id: i64,
        supplied_key: Option<&str>,
    ) -> Result<(), CafeError> {
        if !api_key_matches(configured_key, supplied_key) {
            log::warn!("Rejected report-closed for cafe {}: bad api key", id);
            return Err(CafeError::Forbidden);
        }

        CafeRepository::delete_cafe(pool, id).await
    }
}

/// Compare keys without short-circuiting on the first differing byte.
/// An unconfigured (empty) secret matches nothing.
pub fn api_key_matches(configured: &str, supplied: Option<&str>) -> bool {
    let Some(supplied) = supplied else {
        return false;
    };
    if configured.is_empty() {
        return false;
    }

    let (a, b) = (configured.as_bytes(), supplied.as_bytes());
    let mut diff = a.len() ^ b.len();
    for i in 0..a.len().max(b.len()) {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        diff |= usize::from(x ^ y);
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::db::memory_pool;
    use crate::db::repository::sample_cafe;

    #[test]
    fn test_api_key_matching() {
        assert!(api_key_matches("TopSecretAPIKey", Some("TopSecretAPIKey")));
        assert!(!api_key_matches("TopSecretAPIKey", Some("TopSecretAPIKeY")));
        assert!(!api_key_matches("TopSecretAPIKey", Some("TopSecret")));
        assert!(!api_key_matches("TopSecretAPIKey", Some("TopSecretAPIKey ")));
        assert!(!api_key_matches("TopSecretAPIKey", None));
        assert!(!api_key_matches("", Some("")));
    }

    #[actix_rt::test]
    async fn test_random_cafe_on_empty_table() {
        let pool = memory_pool().await;
        let err = CafeService::random_cafe(&pool).await.unwrap_err();
        assert!(matches!(err, CafeError::EmptyCollection));
    }

    #[actix_rt::test]
    async fn test_search_without_location() {
        let pool = memory_pool().await;
        CafeRepository::create_cafe(&pool, &sample_cafe("Costa", "London"))
            .await
            .unwrap();

        let err = CafeService::search_by_location(&pool, None).await.unwrap_err();
        assert!(matches!(err, CafeError::NoCafesAtLocation(_)));
    }

    #[actix_rt::test]
    async fn test_forbidden_takes_precedence() {
        let pool = memory_pool().await;
        let id = CafeRepository::create_cafe(&pool, &sample_cafe("Costa", "London"))
            .await
            .unwrap();

        for target in [id, id + 100] {
            let err = CafeService::report_closed(&pool, "secret", target, Some("wrong"))
                .await
                .unwrap_err();
            assert!(matches!(err, CafeError::Forbidden));
        }
        assert_eq!(CafeService::all_cafes(&pool).await.unwrap().len(), 1);

        CafeService::report_closed(&pool, "secret", id, Some("secret"))
            .await
            .unwrap();
        assert!(CafeService::all_cafes(&pool).await.unwrap().is_empty());
    }
}

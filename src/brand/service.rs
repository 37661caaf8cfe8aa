//! Brand business rules

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use super::{Brand, BrandFilter, BrandStore};
use crate::error::{ServiceError, ServiceResult, bounded};

/// Brand existence check consumed by the product service
#[async_trait]
pub trait BrandLookup: Send + Sync {
    async fn check_brand_by_id(&self, id: i64) -> ServiceResult<Brand>;
}

pub struct BrandService {
    store: Arc<dyn BrandStore>,
    timeout: Duration,
}

impl BrandService {
    pub fn new(store: Arc<dyn BrandStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    /// Create a brand, rejecting duplicate titles.
    pub async fn create(&self, title: &str) -> ServiceResult<i64> {
        bounded(self.timeout, async {
            let existing = self.store.get_brands(&BrandFilter::by_title(title)).await?;
            if !existing.is_empty() {
                return Err(ServiceError::duplicate("brand title already exists"));
            }

            let id = self.store.create(title).await?;
            tracing::info!(brand_id = id, title, "brand created");
            Ok(id)
        })
        .await
    }

    pub async fn get_brands(&self, filter: BrandFilter) -> ServiceResult<Vec<Brand>> {
        bounded(self.timeout, async {
            Ok(self.store.get_brands(&filter).await?)
        })
        .await
    }
}

#[async_trait]
impl BrandLookup for BrandService {
    async fn check_brand_by_id(&self, id: i64) -> ServiceResult<Brand> {
        bounded(self.timeout, async {
            let mut brands = self.store.get_brands(&BrandFilter::by_id(id)).await?;
            match brands.pop() {
                Some(brand) => Ok(brand),
                None => Err(ServiceError::not_found(format!(
                    "brand {} does not exist",
                    id
                ))),
            }
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// In-memory store recording created titles
    struct MemoryBrandStore {
        brands: Mutex<Vec<Brand>>,
        fail: bool,
    }

    impl MemoryBrandStore {
        fn new(brands: Vec<Brand>) -> Self {
            Self {
                brands: Mutex::new(brands),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                brands: Mutex::new(Vec::new()),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl BrandStore for MemoryBrandStore {
        async fn create(&self, title: &str) -> Result<i64, sqlx::Error> {
            if self.fail {
                return Err(sqlx::Error::PoolClosed);
            }
            let mut brands = self.brands.lock().unwrap();
            let id = brands.len() as i64 + 1;
            brands.push(Brand {
                id,
                title: title.to_string(),
            });
            Ok(id)
        }

        async fn get_brands(&self, filter: &BrandFilter) -> Result<Vec<Brand>, sqlx::Error> {
            if self.fail {
                return Err(sqlx::Error::PoolClosed);
            }
            let brands = self.brands.lock().unwrap();
            let mut matched: Vec<Brand> = brands
                .iter()
                .filter(|b| filter.id.is_none_or(|id| b.id == id))
                .filter(|b| filter.title.as_ref().is_none_or(|t| &b.title == t))
                .cloned()
                .collect();
            if let Some(limit) = filter.limit {
                matched.truncate(limit as usize);
            }
            Ok(matched)
        }
    }

    fn service(store: MemoryBrandStore) -> BrandService {
        BrandService::new(Arc::new(store), Duration::from_secs(2))
    }

    #[tokio::test]
    async fn test_create_brand_success() {
        let service = service(MemoryBrandStore::new(vec![]));
        let id = service.create("Nike").await.unwrap();
        assert_eq!(id, 1);
    }

    #[tokio::test]
    async fn test_create_brand_duplicate_title() {
        let service = service(MemoryBrandStore::new(vec![Brand {
            id: 1,
            title: "Nike".to_string(),
        }]));

        let err = service.create("Nike").await.unwrap_err();
        assert!(matches!(err, ServiceError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_check_brand_by_id_not_found() {
        let service = service(MemoryBrandStore::new(vec![]));
        let err = service.check_brand_by_id(42).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_check_brand_by_id_found() {
        let service = service(MemoryBrandStore::new(vec![Brand {
            id: 7,
            title: "Adidas".to_string(),
        }]));

        let brand = service.check_brand_by_id(7).await.unwrap();
        assert_eq!(brand.title, "Adidas");
    }

    #[tokio::test]
    async fn test_store_failure_is_system_error() {
        let service = service(MemoryBrandStore::failing());
        let err = service.create("Puma").await.unwrap_err();
        assert!(matches!(err, ServiceError::System(_)));
    }
}

//! Sites service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    domain::sites::{
        data::{NewSite, SiteUpdate},
        errors::SitesServiceError,
        records::{SiteId, SiteRecord},
    },
    store::MemoryTable,
};

#[derive(Debug, Clone)]
pub struct MemorySitesService {
    table: Arc<MemoryTable<SiteRecord>>,
}

impl MemorySitesService {
    #[must_use]
    pub fn new(table: MemoryTable<SiteRecord>) -> Self {
        Self {
            table: Arc::new(table),
        }
    }
}

#[async_trait]
impl SitesService for MemorySitesService {
    async fn list_sites(&self) -> Result<Vec<SiteRecord>, SitesServiceError> {
        Ok(self.table.all().await)
    }

    async fn get_site(&self, site: SiteId) -> Result<SiteRecord, SitesServiceError> {
        Ok(self.table.get(site).await?)
    }

    async fn create_site(&self, site: NewSite) -> Result<SiteRecord, SitesServiceError> {
        let created = self
            .table
            .insert_with(|id| SiteRecord {
                id,
                name: site.name,
                url: site.url,
                da: site.da,
                dr: site.dr,
                monthly_traffic: site.monthly_traffic,
                spam_score: site.spam_score,
                price: site.price,
                category: site.category,
                link_type: site.link_type,
                site_type: site.site_type,
                description: site.description,
            })
            .await?;

        info!(site_id = %created.id, url = %created.url, "created site");

        Ok(created)
    }

    async fn update_site(
        &self,
        site: SiteId,
        update: SiteUpdate,
    ) -> Result<SiteRecord, SitesServiceError> {
        let updated = self
            .table
            .update_with(site, |record| merge(record, update))
            .await?;

        info!(site_id = %site, "updated site");

        Ok(updated)
    }

    async fn delete_site(&self, site: SiteId) -> Result<(), SitesServiceError> {
        self.table.remove(site).await?;

        info!(site_id = %site, "deleted site");

        Ok(())
    }
}

fn merge(record: &mut SiteRecord, update: SiteUpdate) {
    let SiteUpdate {
        name,
        url,
        da,
        dr,
        monthly_traffic,
        spam_score,
        price,
        category,
        link_type,
        site_type,
        description,
    } = update;

    if let Some(name) = name {
        record.name = name;
    }
    if let Some(url) = url {
        record.url = url;
    }
    if let Some(da) = da {
        record.da = da;
    }
    if let Some(dr) = dr {
        record.dr = dr;
    }
    if let Some(monthly_traffic) = monthly_traffic {
        record.monthly_traffic = monthly_traffic;
    }
    if let Some(spam_score) = spam_score {
        record.spam_score = spam_score;
    }
    if let Some(price) = price {
        record.price = price;
    }
    if let Some(category) = category {
        record.category = category;
    }
    if let Some(link_type) = link_type {
        record.link_type = link_type;
    }
    if let Some(site_type) = site_type {
        record.site_type = site_type;
    }
    if let Some(description) = description {
        record.description = description;
    }
}

#[automock]
#[async_trait]
pub trait SitesService: Send + Sync {
    /// Retrieve every site in catalog order.
    async fn list_sites(&self) -> Result<Vec<SiteRecord>, SitesServiceError>;

    /// Retrieve a single site.
    async fn get_site(&self, site: SiteId) -> Result<SiteRecord, SitesServiceError>;

    /// Creates a new site; the identity is assigned by the store.
    async fn create_site(&self, site: NewSite) -> Result<SiteRecord, SitesServiceError>;

    /// Merges the supplied fields into the site with the given identity.
    async fn update_site(
        &self,
        site: SiteId,
        update: SiteUpdate,
    ) -> Result<SiteRecord, SitesServiceError>;

    /// Permanently deletes a site.
    async fn delete_site(&self, site: SiteId) -> Result<(), SitesServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{new_site, sites_service};

    use super::*;

    #[tokio::test]
    async fn create_site_assigns_next_identity() -> TestResult {
        let service = sites_service(vec![]);

        let first = service.create_site(new_site("alpha.com")).await?;
        let second = service.create_site(new_site("beta.com")).await?;

        assert_eq!(first.id, SiteId::from_u64(1));
        assert_eq!(second.id, SiteId::from_u64(2));
        assert_eq!(second.url, "beta.com");

        Ok(())
    }

    #[tokio::test]
    async fn get_site_returns_created_site() -> TestResult {
        let service = sites_service(vec![]);

        let created = service.create_site(new_site("alpha.com")).await?;
        let fetched = service.get_site(created.id).await?;

        assert_eq!(fetched, created);

        Ok(())
    }

    #[tokio::test]
    async fn get_site_unknown_id_returns_not_found() {
        let service = sites_service(vec![]);

        let result = service.get_site(SiteId::from_u64(404)).await;

        assert!(
            matches!(result, Err(SitesServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_site_merges_only_supplied_fields() -> TestResult {
        let service = sites_service(vec![]);

        let created = service.create_site(new_site("alpha.com")).await?;

        let updated = service
            .update_site(
                created.id,
                SiteUpdate {
                    price: Some(450_00),
                    ..SiteUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.price, 450_00);
        assert_eq!(updated.url, created.url);
        assert_eq!(updated.da, created.da);

        Ok(())
    }

    #[tokio::test]
    async fn update_site_unknown_id_returns_not_found() {
        let service = sites_service(vec![]);

        let result = service
            .update_site(SiteId::from_u64(404), SiteUpdate::default())
            .await;

        assert!(
            matches!(result, Err(SitesServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_site_makes_it_not_found() -> TestResult {
        let service = sites_service(vec![]);

        let created = service.create_site(new_site("alpha.com")).await?;

        service.delete_site(created.id).await?;

        let result = service.get_site(created.id).await;

        assert!(
            matches!(result, Err(SitesServiceError::NotFound)),
            "expected NotFound after deletion, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_site_unknown_id_returns_not_found() {
        let service = sites_service(vec![]);

        let result = service.delete_site(SiteId::from_u64(404)).await;

        assert!(
            matches!(result, Err(SitesServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_sites_returns_catalog_order() -> TestResult {
        let service = sites_service(vec![]);

        service.create_site(new_site("alpha.com")).await?;
        service.create_site(new_site("beta.com")).await?;

        let urls: Vec<String> = service
            .list_sites()
            .await?
            .into_iter()
            .map(|site| site.url)
            .collect();

        assert_eq!(urls, vec!["alpha.com", "beta.com"]);

        Ok(())
    }
}

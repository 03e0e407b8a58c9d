//! Website query service
//!
//! Read-only search and aggregation. Each call works on one repository
//! snapshot and preserves insertion order.

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::{Website, WebsiteStats, WebsiteStatus};

/// Website query service
pub struct QueryService {
    ctx: Arc<ServiceContext>,
}

impl QueryService {
    /// Create a query service instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Case-insensitive substring search over name and subdomain
    ///
    /// The term is matched as given, whitespace included; only the empty
    /// term returns the whole collection.
    pub async fn search(&self, term: &str) -> CoreResult<Vec<Website>> {
        let mut websites = self.ctx.website_repository.find_all().await?;

        if !term.is_empty() {
            let needle = term.to_lowercase();
            websites.retain(|w| {
                w.name.to_lowercase().contains(&needle)
                    || w.subdomain.to_lowercase().contains(&needle)
            });
        }
        Ok(websites)
    }

    /// Aggregate counts over the current collection
    pub async fn stats(&self) -> CoreResult<WebsiteStats> {
        let websites = self.ctx.website_repository.find_all().await?;
        Ok(WebsiteStats::from_websites(&websites))
    }

    /// Websites currently in the given status
    pub async fn filter_by_status(&self, status: WebsiteStatus) -> CoreResult<Vec<Website>> {
        let mut websites = self.ctx.website_repository.find_all().await?;
        websites.retain(|w| w.status == status);
        Ok(websites)
    }

    /// Websites owned by the given operator
    pub async fn list_by_owner(&self, owner: &str) -> CoreResult<Vec<Website>> {
        let mut websites = self.ctx.website_repository.find_all().await?;
        websites.retain(|w| w.owner == owner);
        Ok(websites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{blog_request, create_test_services, TestServices};

    async fn seeded() -> (TestServices, Vec<Website>) {
        let t = create_test_services();
        let mut created = Vec::new();
        for (name, subdomain) in [
            ("My Personal Blog", "johnblog"),
            ("Tech Startup", "techstartup"),
            ("Online Store", "mystore"),
        ] {
            created.push(
                t.provisioning
                    .create_website(blog_request(name, subdomain))
                    .await
                    .unwrap(),
            );
        }
        (t, created)
    }

    fn ids(websites: &[Website]) -> Vec<&str> {
        websites.iter().map(|w| w.id.as_str()).collect()
    }

    #[tokio::test]
    async fn empty_term_returns_everything_in_order() {
        let (t, created) = seeded().await;
        let all = t.queries.search("").await.unwrap();
        assert_eq!(ids(&all), ids(&created));

        assert!(t.queries.search("   ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn whitespace_in_term_is_significant() {
        let t = create_test_services();
        let joined = t
            .provisioning
            .create_website(blog_request("MyBlog", "joined"))
            .await
            .unwrap();
        let spaced = t
            .provisioning
            .create_website(blog_request("My Blog", "spaced"))
            .await
            .unwrap();

        let hits = t.queries.search(" blog").await.unwrap();
        assert_eq!(ids(&hits), vec![spaced.id.as_str()]);

        let hits = t.queries.search("blog").await.unwrap();
        assert_eq!(ids(&hits), vec![joined.id.as_str(), spaced.id.as_str()]);
    }

    #[tokio::test]
    async fn search_matches_name_or_subdomain_case_insensitively() {
        let (t, created) = seeded().await;

        let by_name = t.queries.search("STORE").await.unwrap();
        assert_eq!(ids(&by_name), vec![created[2].id.as_str()]);

        let by_subdomain = t.queries.search("john").await.unwrap();
        assert_eq!(ids(&by_subdomain), vec![created[0].id.as_str()]);

        // "te" 同时命中 "Tech Startup" 和 "techstartup"，只返回一次
        let both = t.queries.search("te").await.unwrap();
        assert_eq!(ids(&both), vec![created[1].id.as_str()]);

        assert!(t.queries.search("nothing-here").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_results_are_subset_in_collection_order() {
        let (t, created) = seeded().await;
        let hits = t.queries.search("o").await.unwrap();
        let all = ids(&created);
        let mut last = 0;
        for id in ids(&hits) {
            let pos = all.iter().position(|x| *x == id).unwrap();
            assert!(pos >= last);
            last = pos;
        }
        assert!(hits
            .iter()
            .all(|w| w.name.to_lowercase().contains('o') || w.subdomain.contains('o')));
    }

    #[tokio::test]
    async fn stats_partition_total() {
        let (t, created) = seeded().await;
        t.websites.toggle_status(&created[0].id).await.unwrap();
        t.websites.toggle_status(&created[1].id).await.unwrap();
        t.websites.toggle_status(&created[1].id).await.unwrap();
        t.websites.record_visits(&created[0].id, 1250).await.unwrap();
        t.websites.record_visits(&created[1].id, 3400).await.unwrap();

        let stats = t.queries.stats().await.unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.active_count, 1);
        assert_eq!(stats.suspended_count, 1);
        assert_eq!(stats.building_count, 1);
        assert_eq!(
            stats.active_count + stats.building_count + stats.suspended_count,
            stats.total
        );
        assert_eq!(stats.total_visitors, 4650);
    }

    #[tokio::test]
    async fn stats_of_empty_store() {
        let t = create_test_services();
        assert_eq!(t.queries.stats().await.unwrap(), WebsiteStats::default());
    }

    #[tokio::test]
    async fn filter_by_status_and_owner() {
        let (t, created) = seeded().await;
        t.websites.toggle_status(&created[2].id).await.unwrap();

        let active = t
            .queries
            .filter_by_status(WebsiteStatus::Active)
            .await
            .unwrap();
        assert_eq!(ids(&active), vec![created[2].id.as_str()]);

        let building = t
            .queries
            .filter_by_status(WebsiteStatus::Building)
            .await
            .unwrap();
        assert_eq!(building.len(), 2);

        assert_eq!(t.queries.list_by_owner("Current User").await.unwrap().len(), 3);
        assert!(t.queries.list_by_owner("Jane Smith").await.unwrap().is_empty());
    }
}

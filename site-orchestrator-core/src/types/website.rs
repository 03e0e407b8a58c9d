//! Website related type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::WebsiteStatus;

/// Managed website
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Website {
    /// Website ID, assigned at provisioning and never reused
    pub id: String,
    /// Display name
    pub name: String,
    /// Normalized (lower-case) subdomain, immutable after creation
    pub subdomain: String,
    /// Mapped custom domain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Catalog template this site was built from
    pub template_id: String,
    /// Lifecycle status
    pub status: WebsiteStatus,
    /// Responsible operator
    pub owner: String,
    /// Free-text description supplied at creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
    /// Total recorded visitors
    #[serde(default)]
    pub visitor_count: u64,
}

impl Website {
    /// Host name on the hosting platform, e.g. `myblog.cms.com`
    #[must_use]
    pub fn platform_host(&self, base_domain: &str) -> String {
        format!("{}.{}", self.subdomain, base_domain.trim_start_matches('.'))
    }

    /// The custom domain if one is mapped, otherwise the platform host
    #[must_use]
    pub fn primary_host(&self, base_domain: &str) -> String {
        self.domain
            .clone()
            .unwrap_or_else(|| self.platform_host(base_domain))
    }

    /// Advance `updated_at`, never moving it before `created_at`
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.created_at);
    }
}

/// Create website request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebsiteRequest {
    pub name: String,
    pub subdomain: String,
    pub template_id: String,
    pub owner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Update website request (partial update)
///
/// Only the display name and the custom domain mapping are mutable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWebsiteRequest {
    /// New display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// `Some(None)` (JSON `null`) removes the mapping
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub domain: Option<Option<String>>,
}

/// Distinguishes an absent field from an explicit `null`
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Aggregate statistics over the website collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteStats {
    pub total: usize,
    pub active_count: usize,
    pub building_count: usize,
    pub suspended_count: usize,
    pub total_visitors: u64,
}

impl WebsiteStats {
    /// Fold a snapshot of websites into counts
    #[must_use]
    pub fn from_websites(websites: &[Website]) -> Self {
        websites.iter().fold(Self::default(), |mut stats, site| {
            stats.total += 1;
            match site.status {
                WebsiteStatus::Active => stats.active_count += 1,
                WebsiteStatus::Building => stats.building_count += 1,
                WebsiteStatus::Suspended => stats.suspended_count += 1,
            }
            stats.total_visitors = stats.total_visitors.saturating_add(site.visitor_count);
            stats
        })
    }
}

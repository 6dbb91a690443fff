//! Cloud account API operations

use crate::config::api;
use crate::error::Result;
use crate::vra::query::Query;
use crate::vra::traits::VraResource;
use crate::vra::VraClient;

use super::models::CloudAccount;

impl VraClient {
    /// Get cloud accounts. Unpaged requests walk every page in parallel;
    /// explicit `--count`/`--skip` turns into a single bounded request.
    pub async fn get_cloud_accounts(&self, query: &Query) -> Result<Vec<CloudAccount>> {
        let path = format!("{}{}", api::CLOUD_ACCOUNTS, query.to_odata());
        if query.is_paged() {
            self.get_content_page(&path, "fetch cloud accounts").await
        } else {
            self.fetch_all_content_pages(&path, "fetch cloud accounts")
                .await
        }
    }

    /// Get a single cloud account by ID
    pub async fn get_cloud_account_by_id(
        &self,
        id: &str,
    ) -> Result<Option<(CloudAccount, serde_json::Value)>> {
        self.get_resource(
            &format!("{}/{}", api::CLOUD_ACCOUNTS, id),
            &format!("cloud account '{}'", id),
        )
        .await
    }

    /// Get a single cloud account by name (server-side filter, then a direct
    /// fetch by ID so callers also get the raw JSON)
    pub async fn get_cloud_account_by_name(
        &self,
        name: &str,
    ) -> Result<Option<(CloudAccount, serde_json::Value)>> {
        let query = Query::new().eq("name", name);
        let accounts = self.get_cloud_accounts(&query).await?;

        if let Some(account) = accounts.into_iter().find(|a| a.matches(name)) {
            self.get_cloud_account_by_id(&account.id).await
        } else {
            Ok(None)
        }
    }

    /// Delete a cloud account by ID
    pub async fn delete_cloud_account(&self, id: &str) -> Result<()> {
        self.delete_resource(
            &format!("{}/{}", api::CLOUD_ACCOUNTS, id),
            &format!("cloud account '{}'", id),
        )
        .await
    }
}

// ContentStore is the seam between the views and the backend.
//
// ContentClient implements it for real traffic; testing::MockStore implements it
// in memory so the view rules run without a network.

use async_trait::async_trait;

use portfolio_client::{
    ContentClient, PortfolioProfile, Project, ProjectDraft, ProjectId, Result,
};

#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn fetch_profile(&self) -> Result<PortfolioProfile>;

    async fn fetch_projects(&self) -> Result<Vec<Project>>;

    /// Replace the whole profile.
    async fn save_profile(&self, profile: &PortfolioProfile) -> Result<()>;

    async fn create_project(&self, draft: &ProjectDraft) -> Result<()>;

    async fn delete_project(&self, id: &ProjectId) -> Result<()>;
}

#[async_trait]
impl ContentStore for ContentClient {
    async fn fetch_profile(&self) -> Result<PortfolioProfile> {
        ContentClient::fetch_profile(self).await
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        ContentClient::fetch_projects(self).await
    }

    async fn save_profile(&self, profile: &PortfolioProfile) -> Result<()> {
        ContentClient::save_profile(self, profile).await
    }

    async fn create_project(&self, draft: &ProjectDraft) -> Result<()> {
        ContentClient::create_project(self, draft).await
    }

    async fn delete_project(&self, id: &ProjectId) -> Result<()> {
        ContentClient::delete_project(self, id).await
    }
}

use std::sync::Arc;

use tracing::{info, warn};

use portfolio_client::{PortfolioProfile, Project};
use showcase_common::fallback::{fallback_profile, fallback_projects};

use crate::traits::ContentStore;

/// Where the displayed content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    Backend,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicContent {
    pub profile: PortfolioProfile,
    pub projects: Vec<Project>,
    pub source: ContentSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicState {
    Loading,
    Ready(PublicContent),
}

/// Read-only view of the portfolio.
///
/// Starts in [`PublicState::Loading`]. The first [`load`](Self::load) settles it
/// for good: either with backend content or with the fallback set.
pub struct PublicView {
    store: Arc<dyn ContentStore>,
    state: PublicState,
}

impl PublicView {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self {
            store,
            state: PublicState::Loading,
        }
    }

    /// Create the view and run its initial load.
    pub async fn mount(store: Arc<dyn ContentStore>) -> Self {
        let mut view = Self::new(store);
        view.load().await;
        view
    }

    /// Fetch profile and projects together. Does nothing once the view has settled.
    pub async fn load(&mut self) {
        if let PublicState::Ready(_) = self.state {
            return;
        }
        let content = load_public_content(self.store.as_ref()).await;
        self.state = PublicState::Ready(content);
    }

    pub fn state(&self) -> &PublicState {
        &self.state
    }

    pub fn content(&self) -> Option<&PublicContent> {
        match &self.state {
            PublicState::Ready(content) => Some(content),
            PublicState::Loading => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, PublicState::Loading)
    }
}

/// Request both entities concurrently. If either fails for any reason the
/// whole result is replaced by the fallback set, never a mix of the two.
pub async fn load_public_content(store: &dyn ContentStore) -> PublicContent {
    let (profile, projects) = tokio::join!(store.fetch_profile(), store.fetch_projects());

    match (profile, projects) {
        (Ok(profile), Ok(projects)) => {
            info!(projects = projects.len(), "Loaded portfolio content");
            PublicContent {
                profile,
                projects,
                source: ContentSource::Backend,
            }
        }
        (profile, projects) => {
            if let Err(e) = &profile {
                warn!(error = %e, "Failed to load portfolio profile");
            }
            if let Err(e) = &projects {
                warn!(error = %e, "Failed to load projects");
            }
            info!("Showing fallback content");
            PublicContent {
                profile: fallback_profile(),
                projects: fallback_projects(),
                source: ContentSource::Fallback,
            }
        }
    }
}

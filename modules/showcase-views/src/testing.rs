// Test mocks for the views.
//
// MockStore (ContentStore) behaves like a tiny in-memory backend: creates assign
// an id and show up in the next fetch, deletes remove from it. Reads and writes
// can be switched to fail, and saves can be held open on a Notify gate.
//
// Plus sample data builders shared by the view and web tests.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use portfolio_client::{
    ContentError, PortfolioProfile, Project, ProjectDraft, ProjectId, Result, SocialLink,
};

use crate::traits::ContentStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadMode {
    Ok,
    Unreachable,
    Malformed,
}

impl ReadMode {
    fn check(self) -> Result<()> {
        match self {
            ReadMode::Ok => Ok(()),
            ReadMode::Unreachable => Err(ContentError::Network("connection refused".to_string())),
            ReadMode::Malformed => Err(ContentError::Parse("expected value at line 1".to_string())),
        }
    }
}

pub struct MockStore {
    profile: Mutex<PortfolioProfile>,
    projects: Mutex<Vec<Project>>,
    profile_mode: ReadMode,
    projects_mode: ReadMode,
    fail_writes: bool,
    save_gate: Option<Arc<Notify>>,
    project_fetch_delay: Option<Duration>,
    saved: Mutex<Vec<PortfolioProfile>>,
    created: Mutex<Vec<ProjectDraft>>,
    deleted: Mutex<Vec<ProjectId>>,
    profile_fetches: AtomicUsize,
    project_fetches: AtomicUsize,
    next_id: AtomicU64,
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            profile: Mutex::new(PortfolioProfile::default()),
            projects: Mutex::new(Vec::new()),
            profile_mode: ReadMode::Ok,
            projects_mode: ReadMode::Ok,
            fail_writes: false,
            save_gate: None,
            project_fetch_delay: None,
            saved: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
            profile_fetches: AtomicUsize::new(0),
            project_fetches: AtomicUsize::new(0),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn with_profile(self, profile: PortfolioProfile) -> Self {
        *self.profile.lock().unwrap() = profile;
        self
    }

    pub fn with_projects(self, projects: Vec<Project>) -> Self {
        *self.projects.lock().unwrap() = projects;
        self
    }

    pub fn failing_profile(mut self) -> Self {
        self.profile_mode = ReadMode::Unreachable;
        self
    }

    pub fn failing_projects(mut self) -> Self {
        self.projects_mode = ReadMode::Unreachable;
        self
    }

    pub fn malformed_projects(mut self) -> Self {
        self.projects_mode = ReadMode::Malformed;
        self
    }

    /// Every save/create/delete answers with a 500.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Saves wait until the returned gate is notified.
    pub fn gated_saves(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.save_gate = Some(gate.clone());
        (self, gate)
    }

    /// Project reads take `delay` (virtual time under a paused clock).
    pub fn slow_project_fetches(mut self, delay: Duration) -> Self {
        self.project_fetch_delay = Some(delay);
        self
    }

    pub fn saved_profiles(&self) -> Vec<PortfolioProfile> {
        self.saved.lock().unwrap().clone()
    }

    pub fn created_drafts(&self) -> Vec<ProjectDraft> {
        self.created.lock().unwrap().clone()
    }

    pub fn deleted_ids(&self) -> Vec<ProjectId> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn profile_fetches(&self) -> usize {
        self.profile_fetches.load(Ordering::SeqCst)
    }

    pub fn project_fetches(&self) -> usize {
        self.project_fetches.load(Ordering::SeqCst)
    }

    fn check_write(&self) -> Result<()> {
        if self.fail_writes {
            return Err(ContentError::Api {
                status: 500,
                message: "internal error".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ContentStore for MockStore {
    async fn fetch_profile(&self) -> Result<PortfolioProfile> {
        self.profile_fetches.fetch_add(1, Ordering::SeqCst);
        self.profile_mode.check()?;
        Ok(self.profile.lock().unwrap().clone())
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        self.project_fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.project_fetch_delay {
            tokio::time::sleep(delay).await;
        }
        self.projects_mode.check()?;
        Ok(self.projects.lock().unwrap().clone())
    }

    async fn save_profile(&self, profile: &PortfolioProfile) -> Result<()> {
        if let Some(gate) = &self.save_gate {
            gate.notified().await;
        }
        self.check_write()?;
        self.saved.lock().unwrap().push(profile.clone());
        *self.profile.lock().unwrap() = profile.clone();
        Ok(())
    }

    async fn create_project(&self, draft: &ProjectDraft) -> Result<()> {
        self.check_write()?;
        self.created.lock().unwrap().push(draft.clone());

        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.projects.lock().unwrap().push(Project {
            id: Some(ProjectId::new(format!("srv-{n}"))),
            title: draft.title.clone(),
            description: Some(draft.description.clone()),
            tags: draft.tags.clone(),
            image_url: draft.image_url.clone(),
            link: draft.link.clone(),
            featured: draft.featured,
            order: draft.order,
        });
        Ok(())
    }

    async fn delete_project(&self, id: &ProjectId) -> Result<()> {
        self.check_write()?;
        self.deleted.lock().unwrap().push(id.clone());
        self.projects
            .lock()
            .unwrap()
            .retain(|p| p.id.as_ref() != Some(id));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Sample data
// ---------------------------------------------------------------------------

pub fn sample_profile() -> PortfolioProfile {
    PortfolioProfile {
        hero_title: "Jamie Rivera".to_string(),
        hero_subtitle: "Interfaces & <motion>".to_string(),
        about: "Ten years of building\nthings people poke at.".to_string(),
        socials: vec![
            SocialLink {
                label: "GitHub".to_string(),
                url: "https://github.com/jrivera".to_string(),
                icon: "github".to_string(),
            },
            SocialLink {
                label: "Dribbble".to_string(),
                url: "https://dribbble.com/jrivera".to_string(),
                icon: "Dribbble".to_string(),
            },
            SocialLink {
                label: "Blog".to_string(),
                url: "https://jrivera.dev".to_string(),
                icon: "rss".to_string(),
            },
        ],
    }
}

pub fn project(id: &str, title: &str) -> Project {
    Project {
        id: Some(ProjectId::new(id)),
        title: title.to_string(),
        description: None,
        tags: vec![],
        image_url: None,
        link: None,
        featured: false,
        order: 0,
    }
}

pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            description: Some("Physics-driven UI kit.".to_string()),
            tags: vec![
                "react".to_string(),
                "physics".to_string(),
                "ui".to_string(),
                "kit".to_string(),
            ],
            link: Some("https://example.com/toybox".to_string()),
            featured: true,
            order: 1,
            ..project("p1", "Toybox")
        },
        Project {
            image_url: Some("https://example.com/orbit.png".to_string()),
            tags: vec!["threejs".to_string()],
            order: 2,
            ..project("p2", "Orbit")
        },
        project("p3", "Notebook"),
    ]
}

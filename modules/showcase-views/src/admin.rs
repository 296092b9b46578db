use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{info, warn};

use portfolio_client::{PortfolioProfile, Project, ProjectId};
use showcase_common::draft::{
    with_blank_social, with_profile_field, with_social_field, without_project, ProfileField,
    ProjectForm, ProjectFormField, SocialField,
};

use crate::status::{
    StatusSlot, CREATED, CREATE_FAILED, CREATE_STATUS_TTL, CREATING, DELETED, DELETE_FAILED,
    DELETE_STATUS_TTL, DELETING, SAVED, SAVE_FAILED, SAVE_STATUS_TTL, SAVING,
};
use crate::traits::ContentStore;

#[derive(Debug, Default)]
struct AdminState {
    profile: PortfolioProfile,
    projects: Vec<Project>,
    form: ProjectForm,
}

/// Point-in-time copy of everything the admin page shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminSnapshot {
    pub profile: PortfolioProfile,
    pub projects: Vec<Project>,
    pub form: ProjectForm,
    pub status: String,
}

/// Editable drafts of the profile and project list, plus the create form.
///
/// Cloning gives another handle to the same drafts. Draft edits take a short
/// lock and never wait on the network, so they keep working while a save,
/// create, or delete is in flight.
#[derive(Clone)]
pub struct AdminView {
    store: Arc<dyn ContentStore>,
    state: Arc<Mutex<AdminState>>,
    status: StatusSlot,
}

impl AdminView {
    /// An unloaded view: empty profile, no projects, blank form.
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self {
            store,
            state: Arc::new(Mutex::new(AdminState::default())),
            status: StatusSlot::new(),
        }
    }

    pub async fn mount(store: Arc<dyn ContentStore>) -> Self {
        let view = Self::new(store);
        view.load().await;
        view
    }

    /// Fetch profile and projects concurrently. Each result is applied on its
    /// own: a failed read leaves that part of the draft as it was.
    pub async fn load(&self) {
        let (profile, projects) =
            tokio::join!(self.store.fetch_profile(), self.store.fetch_projects());

        match profile {
            Ok(profile) => self.lock().profile = profile,
            Err(e) => warn!(error = %e, "Admin: failed to load portfolio profile"),
        }
        match projects {
            Ok(projects) => {
                info!(count = projects.len(), "Admin: loaded projects");
                self.lock().projects = projects;
            }
            Err(e) => warn!(error = %e, "Admin: failed to load projects"),
        }
    }

    // --- Reads ---

    pub fn snapshot(&self) -> AdminSnapshot {
        let state = self.lock();
        AdminSnapshot {
            profile: state.profile.clone(),
            projects: state.projects.clone(),
            form: state.form.clone(),
            status: self.status.message(),
        }
    }

    pub fn profile(&self) -> PortfolioProfile {
        self.lock().profile.clone()
    }

    pub fn projects(&self) -> Vec<Project> {
        self.lock().projects.clone()
    }

    pub fn form(&self) -> ProjectForm {
        self.lock().form.clone()
    }

    pub fn status(&self) -> &StatusSlot {
        &self.status
    }

    // --- Profile draft ---

    pub fn edit_profile(&self, field: ProfileField, value: &str) {
        let mut state = self.lock();
        state.profile = with_profile_field(&state.profile, field, value);
    }

    pub fn add_social(&self) {
        let mut state = self.lock();
        state.profile.socials = with_blank_social(&state.profile.socials);
    }

    pub fn edit_social(&self, index: usize, field: SocialField, value: &str) {
        let mut state = self.lock();
        state.profile.socials = with_social_field(&state.profile.socials, index, field, value);
    }

    /// Send the whole current draft. On failure the draft is kept as edited.
    pub async fn save_profile(&self) -> bool {
        let profile = self.profile();
        self.status.set(SAVING);

        match self.store.save_profile(&profile).await {
            Ok(()) => {
                info!(socials = profile.socials.len(), "Admin: profile saved");
                self.status.flash(SAVED, SAVE_STATUS_TTL);
                true
            }
            Err(e) => {
                warn!(error = %e, "Admin: profile save failed");
                self.status.flash(SAVE_FAILED, SAVE_STATUS_TTL);
                false
            }
        }
    }

    // --- Project creation ---

    pub fn edit_form(&self, field: ProjectFormField, value: &str) {
        self.lock().form.set(field, value);
    }

    pub fn set_featured(&self, featured: bool) {
        self.lock().form.featured = featured;
    }

    pub fn replace_form(&self, form: ProjectForm) {
        self.lock().form = form;
    }

    /// Create a project from the form. On success the form resets and the list
    /// is re-fetched so ids and order come from the backend. On failure the
    /// form keeps what was entered.
    pub async fn create_project(&self) -> bool {
        let form = self.form();
        let draft = match form.to_draft() {
            Ok(draft) => draft,
            Err(e) => {
                self.status.flash(e.to_string(), CREATE_STATUS_TTL);
                return false;
            }
        };

        self.status.set(CREATING);
        match self.store.create_project(&draft).await {
            Ok(()) => {
                info!(title = draft.title.as_str(), "Admin: project created");
                self.status.set(CREATED);
                self.lock().form = ProjectForm::default();
                self.refresh_projects().await;
                // The clear timer starts once the list is current.
                self.status.flash(CREATED, CREATE_STATUS_TTL);
                true
            }
            Err(e) => {
                warn!(error = %e, "Admin: project create failed");
                self.status.flash(CREATE_FAILED, CREATE_STATUS_TTL);
                false
            }
        }
    }

    async fn refresh_projects(&self) {
        match self.store.fetch_projects().await {
            Ok(projects) => self.lock().projects = projects,
            Err(e) => warn!(error = %e, "Admin: project refresh failed, keeping current list"),
        }
    }

    // --- Project deletion ---

    /// Delete by id. On success only that entry is dropped locally; on failure
    /// the list is left alone.
    pub async fn delete_project(&self, id: &ProjectId) -> bool {
        self.status.set(DELETING);

        match self.store.delete_project(id).await {
            Ok(()) => {
                info!(%id, "Admin: project deleted");
                let mut state = self.lock();
                state.projects = without_project(&state.projects, id);
                drop(state);
                self.status.flash(DELETED, DELETE_STATUS_TTL);
                true
            }
            Err(e) => {
                warn!(error = %e, %id, "Admin: project delete failed");
                self.status.flash(DELETE_FAILED, DELETE_STATUS_TTL);
                false
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, AdminState> {
        self.state.lock().expect("admin state lock poisoned")
    }
}

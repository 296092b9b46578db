use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect},
};
use serde::Deserialize;
use tracing::info;

use showcase_common::{ProfileField, ProjectForm, ProjectId, SocialField};
use showcase_views::PublicView;

use crate::templates::{render_admin, render_public};
use crate::AppState;

// --- Public ---

/// Every visit mounts a fresh public view, so it always reflects the backend
/// as of that request.
pub async fn public_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let view = PublicView::mount(state.store.clone()).await;
    Html(render_public(&view))
}

// --- Admin ---

/// The admin view is process-wide. Its first visit runs the initial load;
/// later visits render the current drafts.
async fn ensure_admin_loaded(state: &AppState) {
    state
        .admin_loaded
        .get_or_init(|| async {
            info!("Loading admin content");
            state.admin.load().await;
        })
        .await;
}

pub async fn admin_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    ensure_admin_loaded(&state).await;
    Html(render_admin(&state.admin.snapshot()))
}

pub async fn admin_reload(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    ensure_admin_loaded(&state).await;
    state.admin.load().await;
    Redirect::to("/admin")
}

/// Apply every submitted profile field to the draft, then either append a
/// blank social link or save the whole draft.
pub async fn profile_submit(
    State(state): State<Arc<AppState>>,
    axum::Form(fields): axum::Form<Vec<(String, String)>>,
) -> impl IntoResponse {
    ensure_admin_loaded(&state).await;

    let mut add_social = false;
    for (name, value) in &fields {
        if name == "action" {
            add_social = value == "add_social";
        } else if let Some(field) = ProfileField::from_name(name) {
            state.admin.edit_profile(field, value);
        } else if let Some((index, field)) = parse_social_key(name) {
            state.admin.edit_social(index, field, value);
        }
    }

    if add_social {
        state.admin.add_social();
    } else {
        state.admin.save_profile().await;
    }
    Redirect::to("/admin")
}

/// `social_<field>_<index>`, e.g. `social_url_2`.
fn parse_social_key(name: &str) -> Option<(usize, SocialField)> {
    let rest = name.strip_prefix("social_")?;
    let (field, index) = rest.split_once('_')?;
    Some((index.parse().ok()?, SocialField::from_name(field)?))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProjectFormInput {
    title: String,
    description: String,
    tags: String,
    image_url: String,
    link: String,
    /// Unchecked checkboxes are not submitted at all.
    featured: Option<String>,
    order: String,
}

impl From<ProjectFormInput> for ProjectForm {
    fn from(input: ProjectFormInput) -> Self {
        ProjectForm {
            title: input.title,
            description: input.description,
            tags: input.tags,
            image_url: input.image_url,
            link: input.link,
            featured: input.featured.is_some(),
            order: input.order,
        }
    }
}

pub async fn project_submit(
    State(state): State<Arc<AppState>>,
    axum::Form(input): axum::Form<ProjectFormInput>,
) -> impl IntoResponse {
    ensure_admin_loaded(&state).await;
    state.admin.replace_form(input.into());
    state.admin.create_project().await;
    Redirect::to("/admin")
}

pub async fn project_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    ensure_admin_loaded(&state).await;
    state.admin.delete_project(&ProjectId::new(id)).await;
    Redirect::to("/admin")
}

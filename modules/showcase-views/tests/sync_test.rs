// Both views against the real ContentClient and an in-memory axum backend.
// The views never talk to each other; the public view only sees admin writes
// because it re-fetches on mount.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};

use portfolio_client::ContentClient;
use showcase_common::draft::{ProfileField, ProjectFormField, SocialField};
use showcase_common::fallback::FALLBACK_HERO_TITLE;
use showcase_views::{AdminView, ContentSource, ContentStore, PublicView};

#[derive(Default)]
struct Backend {
    profile: Value,
    projects: Vec<Value>,
    next_id: u64,
}

type Shared = Arc<Mutex<Backend>>;

fn backend_router(shared: Shared) -> Router {
    Router::new()
        .route(
            "/api/portfolio",
            get(|State(b): State<Shared>| async move { Json(b.lock().unwrap().profile.clone()) }),
        )
        .route(
            "/api/projects",
            get(|State(b): State<Shared>| async move {
                Json(Value::Array(b.lock().unwrap().projects.clone()))
            }),
        )
        .route(
            "/api/admin/portfolio",
            post(|State(b): State<Shared>, Json(body): Json<Value>| async move {
                b.lock().unwrap().profile = body;
                Json(json!({"status": "ok"}))
            }),
        )
        .route(
            "/api/admin/projects",
            post(|State(b): State<Shared>, Json(mut body): Json<Value>| async move {
                let mut backend = b.lock().unwrap();
                backend.next_id += 1;
                body["id"] = json!(format!("db-{}", backend.next_id));
                backend.projects.push(body);
                StatusCode::CREATED
            }),
        )
        .route(
            "/api/admin/projects/{id}",
            delete(|State(b): State<Shared>, Path(id): Path<String>| async move {
                b.lock()
                    .unwrap()
                    .projects
                    .retain(|p| p["id"].as_str() != Some(id.as_str()));
                StatusCode::NO_CONTENT
            }),
        )
        .with_state(shared)
}

async fn spawn(app: Router) -> Arc<dyn ContentStore> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Arc::new(ContentClient::new(&format!("http://{addr}")).unwrap())
}

fn seeded() -> Shared {
    Arc::new(Mutex::new(Backend {
        profile: json!({
            "hero_title": "Before",
            "hero_subtitle": "Sub",
            "about": "About",
            "socials": [{"label": "GitHub", "url": "https://github.com/", "icon": "github"}]
        }),
        projects: vec![json!({"id": "db-0", "title": "Seed", "order": 1})],
        next_id: 0,
    }))
}

#[tokio::test]
async fn admin_writes_show_up_on_next_public_mount() {
    let store = spawn(backend_router(seeded())).await;

    let public_before = PublicView::mount(store.clone()).await;
    let before = public_before.content().unwrap();
    assert_eq!(before.source, ContentSource::Backend);
    assert_eq!(before.profile.hero_title, "Before");

    let admin = AdminView::mount(store.clone()).await;
    admin.edit_profile(ProfileField::HeroTitle, "After");
    admin.add_social();
    admin.edit_social(1, SocialField::Label, "Site");
    assert!(admin.save_profile().await);

    admin.edit_form(ProjectFormField::Title, "Fresh");
    admin.edit_form(ProjectFormField::Tags, "rust, axum,");
    assert!(admin.create_project().await);

    // The earlier public view is not touched by the admin's writes.
    assert_eq!(public_before.content().unwrap().profile.hero_title, "Before");

    let public_after = PublicView::mount(store.clone()).await;
    let after = public_after.content().unwrap();
    assert_eq!(after.profile.hero_title, "After");
    assert_eq!(after.profile.socials.len(), 2);
    assert_eq!(after.profile.socials[1].label, "Site");
    assert_eq!(after.profile.socials[1].icon, "globe");
    assert_eq!(after.projects, admin.projects());

    let fresh = after.projects.iter().find(|p| p.title == "Fresh").unwrap();
    assert_eq!(fresh.tags, vec!["rust", "axum"]);
    assert!(fresh.id.is_some());
}

#[tokio::test]
async fn admin_delete_matches_backend() {
    let store = spawn(backend_router(seeded())).await;
    let admin = AdminView::mount(store.clone()).await;

    let id = admin.projects()[0].id.clone().unwrap();
    assert!(admin.delete_project(&id).await);
    assert!(admin.projects().is_empty());

    let public = PublicView::mount(store).await;
    assert!(public.content().unwrap().projects.is_empty());
}

#[tokio::test]
async fn broken_backend_means_fallback_in_public_and_empty_admin() {
    let app = Router::new()
        .route("/api/portfolio", get(|| async { StatusCode::BAD_GATEWAY }))
        .route("/api/projects", get(|| async { Json(json!([])) }));
    let store = spawn(app).await;

    let public = PublicView::mount(store.clone()).await;
    let content = public.content().unwrap();
    assert_eq!(content.source, ContentSource::Fallback);
    assert_eq!(content.profile.hero_title, FALLBACK_HERO_TITLE);
    assert_eq!(content.projects.len(), 2);

    let admin = AdminView::mount(store).await;
    assert_eq!(admin.profile().hero_title, "");
    assert!(admin.projects().is_empty());
}

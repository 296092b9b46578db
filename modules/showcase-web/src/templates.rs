use chrono::Datelike;
use url::Url;

use showcase_common::{PortfolioProfile, Project, ProjectForm, ProjectId, SocialLink};
use showcase_views::{AdminSnapshot, PublicView};

const DEFAULT_HERO_TITLE: &str = "Interactive Portfolio";
const DEFAULT_HERO_SUBTITLE: &str = "Modern, playful, and tech-forward.";
const DEFAULT_ABOUT: &str =
    "This portfolio showcases a collection of interactive experiments and client work.";

/// Tags shown per project card.
const CARD_TAG_LIMIT: usize = 3;

// --- Public page ---

/// Render the public portfolio page. A view that hasn't settled yet renders
/// its loading state in place of the project grid.
pub fn render_public(view: &PublicView) -> String {
    let (profile, projects_section) = match view.content() {
        Some(content) => (Some(&content.profile), render_project_grid(&content.projects)),
        None => (None, r#"<p class="muted">Loading…</p>"#.to_string()),
    };

    let hero_title = profile
        .map(|p| p.hero_title.as_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_HERO_TITLE);
    let hero_subtitle = profile
        .map(|p| p.hero_subtitle.as_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_HERO_SUBTITLE);
    let about = profile
        .map(|p| p.about.as_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_ABOUT);

    let socials: String = profile
        .map(|p| p.socials.iter().map(render_social_link).collect())
        .unwrap_or_default();

    let content = format!(
        r#"<section class="hero">
    <h1>{title}</h1>
    <p class="subtitle">{subtitle}</p>
    <div class="socials">{socials}<a href="/admin" class="pill pill-admin">Admin Panel</a></div>
</section>
<section class="container">
    <div class="panel"><h2>About</h2><p class="about">{about}</p></div>
</section>
<section class="container">
    <h2 style="margin-bottom:16px;">Selected Work</h2>
    {projects_section}
</section>
<footer>© {year} • Built with love and a hint of play</footer>"#,
        title = html_escape(hero_title),
        subtitle = html_escape(hero_subtitle),
        about = html_escape(about),
        year = chrono::Utc::now().year(),
    );

    build_page("Portfolio", &content)
}

fn render_social_link(social: &SocialLink) -> String {
    format!(
        r#"<a class="pill social-link" href="{url}" target="_blank" rel="noreferrer"><span class="icon">{icon}</span> {label}</a>"#,
        url = html_escape(&social.url),
        icon = social_icon(&social.icon),
        label = html_escape(&social.label),
    )
}

fn render_project_grid(projects: &[Project]) -> String {
    let cards: String = projects.iter().map(render_project_card).collect();
    format!(r#"<div class="grid">{cards}</div>"#)
}

fn render_project_card(project: &Project) -> String {
    let (href, target) = match project.link.as_deref() {
        Some(link) => (html_escape(link), "_blank"),
        None => ("#".to_string(), "_self"),
    };

    let image = match project.image_url.as_deref() {
        Some(src) => format!(
            r#"<img src="{}" alt="{}" class="card-image">"#,
            html_escape(src),
            html_escape(&project.title)
        ),
        None => r#"<div class="card-image card-placeholder"></div>"#.to_string(),
    };

    let featured = if project.featured {
        r#"<span class="badge badge-featured">Featured</span>"#
    } else {
        ""
    };

    let tags: String = project
        .tags
        .iter()
        .take(CARD_TAG_LIMIT)
        .map(|t| format!(r#"<span class="tag">{}</span>"#, html_escape(t)))
        .collect();

    format!(
        r#"<a class="project-card" href="{href}" target="{target}" rel="noreferrer">
    {image}
    <div class="card-body">
        <div class="card-meta">{featured}{tags}</div>
        <h3>{title}</h3>
        <p class="summary">{description}</p>
    </div>
</a>"#,
        title = html_escape(&project.title),
        description = html_escape(project.description.as_deref().unwrap_or_default()),
    )
}

/// Glyph for a social icon name. Blank names count as "globe"; unknown ones get a link glyph.
pub fn social_icon(name: &str) -> &'static str {
    let key = if name.trim().is_empty() {
        "globe".to_string()
    } else {
        name.trim().to_lowercase()
    };
    match key.as_str() {
        "github" => "🐙",
        "linkedin" => "💼",
        "twitter" | "x" => "🐦",
        "globe" => "🌐",
        "dribbble" => "🏀",
        "behance" => "🎨",
        _ => "🔗",
    }
}

// --- Admin page ---

/// Render the admin panel from a snapshot of its drafts.
pub fn render_admin(snapshot: &AdminSnapshot) -> String {
    let status = if snapshot.status.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="status" role="status">{}</div>"#,
            html_escape(&snapshot.status)
        )
    };

    let content = format!(
        r#"<div class="container">
    <div class="admin-header">
        <h2>Admin Panel</h2>
        <div>
            <form method="post" action="/admin/reload" class="inline"><button class="link-btn">Reload</button></form>
            <a href="/">Back to site</a>
        </div>
    </div>
    <div class="admin-grid">
        {profile_form}
        <div>
            {project_form}
            {project_list}
        </div>
    </div>
    {status}
</div>"#,
        profile_form = render_profile_form(&snapshot.profile),
        project_form = render_project_form(&snapshot.form),
        project_list = render_admin_project_list(&snapshot.projects),
    );

    build_page("Admin Panel", &content)
}

fn render_profile_form(profile: &PortfolioProfile) -> String {
    let socials: String = profile
        .socials
        .iter()
        .enumerate()
        .map(|(i, s)| {
            format!(
                r#"<div class="social-row">
    {label}
    {url}
    {icon}
</div>"#,
                label = text_input(&format!("social_label_{i}"), "Label", &s.label, "GitHub"),
                url = text_input(&format!("social_url_{i}"), "URL", &s.url, "https://github.com/you"),
                icon = text_input(&format!("social_icon_{i}"), "Icon", &s.icon, "github"),
            )
        })
        .collect();

    format!(
        r#"<form method="post" action="/admin/profile" class="panel">
    <h3>Portfolio Content</h3>
    {hero_title}
    {hero_subtitle}
    <label class="field"><span>About</span><textarea name="about" rows="5">{about}</textarea></label>
    <div class="social-header">
        <span>Social Links</span>
        <button type="submit" name="action" value="add_social" class="small-btn">Add</button>
    </div>
    {socials}
    <button type="submit" name="action" value="save" class="action-btn">Save</button>
</form>"#,
        hero_title = text_input(
            "hero_title",
            "Hero Title",
            &profile.hero_title,
            "Hey, I'm Alex, creative developer"
        ),
        hero_subtitle = text_input(
            "hero_subtitle",
            "Hero Subtitle",
            &profile.hero_subtitle,
            "I build playful, interactive web experiences."
        ),
        about = html_escape(&profile.about),
    )
}

fn render_project_form(form: &ProjectForm) -> String {
    let checked = if form.featured { " checked" } else { "" };

    format!(
        r#"<form method="post" action="/admin/projects" class="panel">
    <h3>Add Project</h3>
    <label class="field"><span>Title</span><input name="title" value="{title}" placeholder="Project title" required></label>
    <label class="field"><span>Description</span><textarea name="description" rows="3" placeholder="Short description">{description}</textarea></label>
    {tags}
    {image_url}
    {link}
    <div class="row">
        <label class="check"><input type="checkbox" name="featured"{checked}> Featured</label>
        <label class="field"><span>Order</span><input name="order" type="number" value="{order}"></label>
    </div>
    <button class="action-btn">Create</button>
</form>"#,
        title = html_escape(&form.title),
        description = html_escape(&form.description),
        tags = text_input("tags", "Tags (comma separated)", &form.tags, "react, threejs"),
        image_url = text_input("image_url", "Image URL", &form.image_url, "https://..."),
        link = text_input("link", "External Link", &form.link, "https://..."),
        order = html_escape(&form.order),
    )
}

fn render_admin_project_list(projects: &[Project]) -> String {
    let mut rows = String::new();

    if projects.is_empty() {
        rows.push_str(r#"<p class="muted">No projects yet.</p>"#);
    }

    for project in projects {
        // Only backend-known projects can be deleted.
        let delete = match project.id.as_ref().and_then(delete_action) {
            Some(action) => format!(
                r#"<form method="post" action="{}" class="inline"><button class="danger-btn">Delete</button></form>"#,
                html_escape(&action)
            ),
            None => String::new(),
        };

        rows.push_str(&format!(
            r#"<div class="project-row">
    <div><p class="project-title">{title}</p><p class="muted">{tags}</p></div>
    {delete}
</div>"#,
            title = html_escape(&project.title),
            tags = html_escape(&project.tags.join(", ")),
        ));
    }

    format!(r#"<div class="panel"><h3>Projects</h3>{rows}</div>"#)
}

fn text_input(name: &str, label: &str, value: &str, placeholder: &str) -> String {
    format!(
        r#"<label class="field"><span>{label}</span><input name="{name}" value="{value}" placeholder="{placeholder}"></label>"#,
        label = html_escape(label),
        name = html_escape(name),
        value = html_escape(value),
        placeholder = html_escape(placeholder),
    )
}

// --- Helpers ---

fn build_page(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
*{{margin:0;padding:0;box-sizing:border-box;}}
body{{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;color:#fff;background:linear-gradient(#0b1020,#0d1330,#0e173d);min-height:100vh;}}
a{{color:inherit;}}
.container{{max-width:1100px;margin:0 auto;padding:24px;}}
.hero{{max-width:1100px;margin:0 auto;padding:120px 24px 48px;}}
.hero h1{{font-size:44px;font-weight:800;line-height:1.15;}}
.hero .subtitle{{margin-top:16px;color:rgba(255,255,255,.8);max-width:640px;}}
.socials{{margin-top:24px;display:flex;flex-wrap:wrap;gap:12px;align-items:center;}}
.pill{{display:inline-flex;gap:8px;align-items:center;padding:6px 12px;border-radius:999px;background:rgba(255,255,255,.1);border:1px solid rgba(255,255,255,.15);text-decoration:none;font-size:14px;}}
.pill-admin{{background:rgba(99,102,241,.9);}}
.panel{{background:rgba(255,255,255,.05);border:1px solid rgba(255,255,255,.1);border-radius:16px;padding:24px;margin-bottom:24px;}}
.panel h2,.panel h3{{margin-bottom:12px;}}
.about{{color:rgba(255,255,255,.8);line-height:1.6;white-space:pre-line;}}
.grid{{display:grid;grid-template-columns:repeat(auto-fill,minmax(300px,1fr));gap:24px;}}
.project-card{{display:block;border-radius:16px;overflow:hidden;background:rgba(255,255,255,.7);color:#111;text-decoration:none;}}
.card-image{{height:192px;width:100%;object-fit:cover;display:block;}}
.card-placeholder{{background:linear-gradient(135deg,#e0e7ff,#e0f2fe);}}
.card-body{{padding:20px;}}
.card-meta{{display:flex;gap:8px;margin-bottom:8px;flex-wrap:wrap;}}
.badge-featured{{font-size:10px;text-transform:uppercase;letter-spacing:.1em;padding:2px 8px;border-radius:999px;background:#fef08a;color:#713f12;}}
.tag{{font-size:12px;padding:2px 8px;border-radius:999px;background:rgba(0,0,0,.05);}}
.summary{{font-size:14px;color:#4b5563;}}
.muted{{color:rgba(255,255,255,.6);font-size:14px;}}
footer{{border-top:1px solid rgba(255,255,255,.1);padding:32px;text-align:center;color:rgba(255,255,255,.6);font-size:14px;}}
.admin-header{{display:flex;justify-content:space-between;align-items:center;margin-bottom:24px;}}
.admin-grid{{display:grid;grid-template-columns:1fr 1fr;gap:32px;}}
.field{{display:block;margin-bottom:12px;font-size:14px;color:rgba(255,255,255,.8);}}
.field input,.field textarea{{margin-top:4px;width:100%;border-radius:8px;background:rgba(255,255,255,.1);border:1px solid rgba(255,255,255,.2);padding:8px 12px;color:#fff;}}
.social-header{{display:flex;justify-content:space-between;align-items:center;margin:8px 0;font-size:14px;}}
.social-row{{display:grid;grid-template-columns:1fr 1fr 1fr;gap:8px;}}
.row{{display:flex;gap:16px;align-items:center;}}
.inline{{display:inline;}}
.action-btn{{padding:8px 16px;border-radius:6px;border:none;background:rgba(99,102,241,.9);color:#fff;cursor:pointer;}}
.small-btn,.link-btn{{padding:4px 8px;border-radius:4px;border:none;background:rgba(255,255,255,.1);color:#fff;cursor:pointer;font-size:12px;}}
.danger-btn{{background:none;border:none;color:#fca5a5;cursor:pointer;}}
.project-row{{display:flex;justify-content:space-between;align-items:center;border-radius:8px;background:rgba(0,0,0,.2);padding:12px 16px;margin-bottom:12px;}}
.project-title{{font-weight:500;}}
.status{{position:fixed;bottom:16px;left:50%;transform:translateX(-50%);border-radius:999px;background:rgba(0,0,0,.6);padding:8px 16px;font-size:14px;}}
</style>
</head>
<body>
{content}
</body>
</html>"#,
        title = html_escape(title),
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// `/admin/projects/{id}/delete`, with the id encoded as a single path segment.
fn delete_action(id: &ProjectId) -> Option<String> {
    let mut url = Url::parse("http://localhost/admin/projects").ok()?;
    url.path_segments_mut().ok()?.push(id.as_str()).push("delete");
    Some(url.path().to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use showcase_common::fallback::FALLBACK_HERO_TITLE;
    use showcase_views::testing::{sample_profile, sample_projects, MockStore};
    use showcase_views::ContentStore;

    async fn mounted(mock: MockStore) -> PublicView {
        let store: Arc<dyn ContentStore> = Arc::new(mock);
        PublicView::mount(store).await
    }

    #[tokio::test]
    async fn public_page_renders_profile_verbatim_with_one_link_per_social() {
        let view = mounted(
            MockStore::new()
                .with_profile(sample_profile())
                .with_projects(sample_projects()),
        )
        .await;
        let html = render_public(&view);
        let profile = sample_profile();

        assert!(html.contains(&html_escape(&profile.hero_title)));
        assert!(html.contains("Interfaces &amp; &lt;motion&gt;"));
        assert!(html.contains(&html_escape(&profile.about)));
        assert_eq!(html.matches(r#"class="pill social-link""#).count(), 3);

        let github = html.find("https://github.com/jrivera").unwrap();
        let dribbble = html.find("https://dribbble.com/jrivera").unwrap();
        let blog = html.find("https://jrivera.dev").unwrap();
        assert!(github < dribbble && dribbble < blog);
    }

    #[tokio::test]
    async fn public_page_falls_back_when_a_read_fails() {
        let view = mounted(MockStore::new().with_profile(sample_profile()).failing_projects()).await;
        let html = render_public(&view);

        assert!(html.contains(&html_escape(FALLBACK_HERO_TITLE)));
        assert_eq!(html.matches(r#"class="project-card""#).count(), 2);
        assert!(!html.contains("Jamie Rivera"));
    }

    #[tokio::test]
    async fn unloaded_view_shows_loading() {
        let store: Arc<dyn ContentStore> = Arc::new(MockStore::new());
        let view = PublicView::new(store);
        let html = render_public(&view);

        assert!(html.contains("Loading…"));
        assert!(html.contains(DEFAULT_HERO_TITLE));
        assert_eq!(html.matches(r#"class="project-card""#).count(), 0);
    }

    #[tokio::test]
    async fn empty_profile_fields_use_defaults() {
        let view = mounted(MockStore::new()).await;
        let html = render_public(&view);

        assert!(html.contains(DEFAULT_HERO_TITLE));
        assert!(html.contains(DEFAULT_HERO_SUBTITLE));
        assert!(html.contains(DEFAULT_ABOUT));
    }

    #[test]
    fn card_links_only_when_project_has_a_link() {
        let projects = sample_projects();
        let linked = render_project_card(&projects[0]);
        assert!(linked.contains(r#"href="https://example.com/toybox" target="_blank""#));
        assert!(linked.contains("Featured"));
        // Four tags, only three shown.
        assert_eq!(linked.matches(r#"class="tag""#).count(), 3);

        let unlinked = render_project_card(&projects[1]);
        assert!(unlinked.contains(r##"href="#" target="_self""##));
        assert!(unlinked.contains(r#"<img src="https://example.com/orbit.png""#));
        assert!(!unlinked.contains("Featured"));

        let plain = render_project_card(&projects[2]);
        assert!(plain.contains("card-placeholder"));
    }

    #[test]
    fn social_icons_map_case_insensitively() {
        assert_eq!(social_icon("GitHub"), "🐙");
        assert_eq!(social_icon("x"), "🐦");
        assert_eq!(social_icon(""), "🌐");
        assert_eq!(social_icon("mastodon"), "🔗");
    }

    #[test]
    fn admin_delete_controls_only_for_projects_with_ids() {
        let mut projects = sample_projects();
        projects.push(Project {
            id: None,
            ..projects[0].clone()
        });
        let snapshot = AdminSnapshot {
            projects,
            ..AdminSnapshot::default()
        };
        let html = render_admin(&snapshot);

        assert_eq!(html.matches(r#"class="project-row""#).count(), 4);
        assert_eq!(html.matches("Delete</button>").count(), 3);
        assert!(html.contains(r#"action="/admin/projects/p1/delete""#));
    }

    #[test]
    fn admin_lists_tags_and_empty_state() {
        let empty = render_admin(&AdminSnapshot::default());
        assert!(empty.contains("No projects yet."));

        let snapshot = AdminSnapshot {
            projects: sample_projects(),
            ..AdminSnapshot::default()
        };
        let html = render_admin(&snapshot);
        assert!(html.contains("react, physics, ui, kit"));
        assert!(!html.contains("No projects yet."));
    }

    #[test]
    fn admin_renders_social_rows_and_status() {
        let snapshot = AdminSnapshot {
            profile: sample_profile(),
            status: "Saved!".to_string(),
            ..AdminSnapshot::default()
        };
        let html = render_admin(&snapshot);

        assert!(html.contains(r#"name="social_label_2" value="Blog""#));
        assert!(html.contains(r#"name="social_icon_1" value="Dribbble""#));
        assert!(html.contains(r#"role="status">Saved!</div>"#));
    }

    #[test]
    fn admin_form_keeps_entered_values() {
        let snapshot = AdminSnapshot {
            form: ProjectForm {
                title: "Half done".to_string(),
                featured: true,
                order: "3".to_string(),
                ..ProjectForm::default()
            },
            ..AdminSnapshot::default()
        };
        let html = render_admin(&snapshot);

        assert!(html.contains(r#"name="title" value="Half done""#));
        assert!(html.contains(r#"name="featured" checked"#));
        assert!(html.contains(r#"name="order" type="number" value="3""#));
    }

    #[test]
    fn delete_path_is_escaped() {
        assert_eq!(
            delete_action(&ProjectId::new("abc-123")).as_deref(),
            Some("/admin/projects/abc-123/delete")
        );
        assert_eq!(
            delete_action(&ProjectId::new("a b/c")).as_deref(),
            Some("/admin/projects/a%20b%2Fc/delete")
        );

        let snapshot = AdminSnapshot {
            projects: vec![Project {
                id: Some(ProjectId::new("x/y")),
                ..sample_projects()[2].clone()
            }],
            ..AdminSnapshot::default()
        };
        assert!(render_admin(&snapshot).contains("/admin/projects/x%2Fy/delete"));
    }
}

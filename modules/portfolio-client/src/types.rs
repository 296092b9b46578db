use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Backend rows may carry an explicit `null` where a value is expected; read it as the default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// --- Portfolio profile ---

/// One entry in the profile's social links. Order in the parent sequence is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
}

/// The singleton hero/about/socials block. Always saved whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub hero_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hero_subtitle: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub about: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub socials: Vec<SocialLink>,
}

// --- Projects ---

/// Backend-assigned project identifier. Accepts a JSON string or any JSON number
/// on the wire and is otherwise opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawProjectId", into = "String")]
pub struct ProjectId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawProjectId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

impl From<RawProjectId> for ProjectId {
    fn from(raw: RawProjectId) -> Self {
        match raw {
            RawProjectId::Text(s) => ProjectId(s),
            RawProjectId::Signed(n) => ProjectId(n.to_string()),
            RawProjectId::Unsigned(n) => ProjectId(n.to_string()),
            RawProjectId::Float(n) => ProjectId(n.to_string()),
        }
    }
}

impl From<ProjectId> for String {
    fn from(id: ProjectId) -> Self {
        id.0
    }
}

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        ProjectId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A project as returned by `GET /api/projects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProjectId>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: i64,
}

/// Body for `POST /api/admin/projects`. Has no `id`; the backend assigns one.
/// Absent `image_url`/`link` serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub link: Option<String>,
    pub featured: bool,
    pub order: i64,
}

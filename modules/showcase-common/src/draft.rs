//! Pure state transitions for the admin drafts.
//!
//! Every function here takes the old value and returns a new one. Nothing is
//! mutated in place, so the admin view can apply edits under a short lock and
//! the transitions can be tested without any view around them.

use portfolio_client::{PortfolioProfile, Project, ProjectDraft, ProjectId, SocialLink};

use crate::error::FormError;

/// Icon given to a freshly added social link.
pub const DEFAULT_SOCIAL_ICON: &str = "globe";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    HeroTitle,
    HeroSubtitle,
    About,
}

impl ProfileField {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hero_title" => Some(Self::HeroTitle),
            "hero_subtitle" => Some(Self::HeroSubtitle),
            "about" => Some(Self::About),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialField {
    Label,
    Url,
    Icon,
}

impl SocialField {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "label" => Some(Self::Label),
            "url" => Some(Self::Url),
            "icon" => Some(Self::Icon),
            _ => None,
        }
    }
}

/// A fully shaped, empty social link.
pub fn blank_social() -> SocialLink {
    SocialLink {
        label: String::new(),
        url: String::new(),
        icon: DEFAULT_SOCIAL_ICON.to_string(),
    }
}

pub fn with_profile_field(
    profile: &PortfolioProfile,
    field: ProfileField,
    value: &str,
) -> PortfolioProfile {
    let mut next = profile.clone();
    let slot = match field {
        ProfileField::HeroTitle => &mut next.hero_title,
        ProfileField::HeroSubtitle => &mut next.hero_subtitle,
        ProfileField::About => &mut next.about,
    };
    *slot = value.to_string();
    next
}

/// Appends a blank entry at the end.
pub fn with_blank_social(socials: &[SocialLink]) -> Vec<SocialLink> {
    let mut next = socials.to_vec();
    next.push(blank_social());
    next
}

/// Replaces one field of entry `index`. Other entries and fields are untouched;
/// an out-of-range index yields an unchanged copy.
pub fn with_social_field(
    socials: &[SocialLink],
    index: usize,
    field: SocialField,
    value: &str,
) -> Vec<SocialLink> {
    let mut next = socials.to_vec();
    if let Some(entry) = next.get_mut(index) {
        let slot = match field {
            SocialField::Label => &mut entry.label,
            SocialField::Url => &mut entry.url,
            SocialField::Icon => &mut entry.icon,
        };
        *slot = value.to_string();
    }
    next
}

/// Splits comma-separated tag input, trimming each piece and dropping empties.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Drops the entry whose `id` equals `id`, keeping the rest in order.
pub fn without_project(projects: &[Project], id: &ProjectId) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| p.id.as_ref() != Some(id))
        .cloned()
        .collect()
}

// --- Project creation form ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFormField {
    Title,
    Description,
    Tags,
    ImageUrl,
    Link,
    Order,
}

/// Raw text of the create-project form, exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub tags: String,
    pub image_url: String,
    pub link: String,
    pub featured: bool,
    pub order: String,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            tags: String::new(),
            image_url: String::new(),
            link: String::new(),
            featured: false,
            order: "0".to_string(),
        }
    }
}

impl ProjectForm {
    pub fn set(&mut self, field: ProjectFormField, value: &str) {
        let slot = match field {
            ProjectFormField::Title => &mut self.title,
            ProjectFormField::Description => &mut self.description,
            ProjectFormField::Tags => &mut self.tags,
            ProjectFormField::ImageUrl => &mut self.image_url,
            ProjectFormField::Link => &mut self.link,
            ProjectFormField::Order => &mut self.order,
        };
        *slot = value.to_string();
    }

    /// Shape the form into a create body. Empty image/link become `None`,
    /// a blank order becomes 0.
    pub fn to_draft(&self) -> Result<ProjectDraft, FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::MissingTitle);
        }

        let order = match self.order.trim() {
            "" => 0,
            raw => raw
                .parse()
                .map_err(|_| FormError::InvalidOrder(raw.to_string()))?,
        };

        Ok(ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            tags: parse_tags(&self.tags),
            image_url: non_empty(&self.image_url),
            link: non_empty(&self.link),
            featured: self.featured,
            order,
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

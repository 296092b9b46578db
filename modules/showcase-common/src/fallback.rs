//! Built-in sample content shown when the backend can't be used.

use portfolio_client::{PortfolioProfile, Project, SocialLink};

pub const FALLBACK_HERO_TITLE: &str = "Hey, I'm Alex — Creative Developer";

pub fn fallback_profile() -> PortfolioProfile {
    PortfolioProfile {
        hero_title: FALLBACK_HERO_TITLE.to_string(),
        hero_subtitle: "I build playful, interactive web experiences.".to_string(),
        about: "I love crafting modern, interactive interfaces that feel alive.".to_string(),
        socials: vec![
            SocialLink {
                label: "GitHub".to_string(),
                url: "https://github.com/".to_string(),
                icon: "github".to_string(),
            },
            SocialLink {
                label: "LinkedIn".to_string(),
                url: "https://linkedin.com/".to_string(),
                icon: "linkedin".to_string(),
            },
        ],
    }
}

pub fn fallback_projects() -> Vec<Project> {
    vec![
        Project {
            id: None,
            title: "Toybox UI".to_string(),
            description: Some("A playful component kit with physics.".to_string()),
            tags: vec!["react".to_string(), "framer-motion".to_string()],
            image_url: None,
            link: Some("#".to_string()),
            featured: true,
            order: 1,
        },
        Project {
            id: None,
            title: "3D Playground".to_string(),
            description: Some("WebGL experiments and microgames.".to_string()),
            tags: vec!["threejs".to_string(), "spline".to_string()],
            image_url: None,
            link: None,
            featured: false,
            order: 2,
        },
    ]
}

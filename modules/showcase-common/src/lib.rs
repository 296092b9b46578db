pub mod config;
pub mod draft;
pub mod error;
pub mod fallback;

pub use config::Config;
pub use draft::*;
pub use error::{ConfigError, FormError};

pub use portfolio_client::{PortfolioProfile, Project, ProjectDraft, ProjectId, SocialLink};

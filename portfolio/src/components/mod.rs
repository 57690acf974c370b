//! Leptos components for the portfolio page.
//!
//! # Component Hierarchy
//!
//! ```text
//! PortfolioDocument (static output only)
//! └── PortfolioPage
//!     ├── CursorFollower
//!     ├── ParticleField
//!     ├── Hero
//!     ├── SkillsSection
//!     │   ├── SkillGlobe (ring badges, orbiting particles)
//!     │   └── SkillBadges
//!     ├── ProjectsSection
//!     │   └── ProjectGallery
//!     ├── ContactSection
//!     │   └── SocialLinks
//!     └── Footer
//! ```
//!
//! Components never touch browser APIs. Live values arrive as signals and
//! reveal transitions are driven by the `reveal`/`is-visible` classes, so the
//! same tree renders to a string in tests and mounts in the browser.

mod backdrop;
mod contact;
mod cursor;
mod document;
mod footer;
mod hero;
mod icons;
mod projects;
mod section;
mod skills;

pub use backdrop::ParticleField;
pub use contact::{ContactSection, SocialLinks};
pub use cursor::CursorFollower;
pub use document::{PortfolioDocument, PortfolioPage};
pub use footer::Footer;
pub use hero::Hero;
pub use icons::*;
pub use projects::{ProjectGallery, ProjectsSection};
pub use section::SectionHeading;
pub use skills::{SkillBadges, SkillGlobe, SkillsSection};

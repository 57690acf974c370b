//! Portfolio data types.
//!
//! Everything here is plain data, fixed once the page loads:
//!
//! - **Serializable** - a content file can replace the literal tables
//! - **Clone-friendly** - components take owned copies
//! - **Default-able** - [`PortfolioContent::default`] is the published page
//!
//! # Example
//!
//! ```rust
//! use portfolio_leptos::types::{Project, PortfolioContent};
//!
//! let content = PortfolioContent {
//!     projects: vec![Project {
//!         title: "Compiler".into(),
//!         description: "Toy compiler".into(),
//!         tech: vec!["Rust".into()],
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//! assert_eq!(content.projects.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// Image shown when a project has no image of its own.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// A project card in the gallery. Identity is `title`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Card heading, unique within the gallery
    pub title: String,
    /// One-line summary under the heading
    pub description: String,
    /// Technologies, rendered as badges in this order
    #[serde(default)]
    pub tech: Vec<String>,
    /// Image URL; empty falls back to [`PLACEHOLDER_IMAGE`]
    #[serde(default)]
    pub image: String,
    /// Target of the external-link button
    #[serde(default = "default_link")]
    pub link: String,
}

fn default_link() -> String {
    "#".into()
}

impl Project {
    /// Image source to render, never empty.
    pub fn image_src(&self) -> &str {
        if self.image.trim().is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            &self.image
        }
    }
}

/// Glyph drawn inside a skill badge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillIcon {
    /// Angle brackets
    #[default]
    Code,
    /// Paint palette
    Palette,
    /// Rack server
    Server,
    /// Database cylinder
    Database,
}

/// A skill on the ring. Identity is `name`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Label, unique within the skill table
    pub name: String,
    /// Glyph inside the ring badge
    #[serde(default)]
    pub icon: SkillIcon,
    /// Accent color, `#rrggbb`
    pub color: String,
}

/// Icon for a social profile link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialIcon {
    /// GitHub mark
    Github,
    /// LinkedIn mark
    Linkedin,
    /// Instagram mark
    Instagram,
}

/// Outbound social profile link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Visible label, also the rendering key
    pub label: String,
    /// Glyph next to the label
    pub icon: SocialIcon,
    /// Absolute profile URL (or `#` while unpublished)
    pub url: String,
}

/// Contact details shown as plain text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Email address (not rendered as a `mailto:` link)
    pub email: String,
    /// Phone number
    pub phone: String,
    /// City, country
    pub location: String,
}

/// Hero banner copy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Big gradient name
    pub name: String,
    /// Role line under the name
    pub tagline: String,
    /// Short paragraph
    pub summary: String,
    /// Portrait image path; `None` shows the text tile
    #[serde(default)]
    pub portrait: Option<String>,
}

/// Everything the page renders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioContent {
    /// Hero copy
    pub profile: Profile,
    /// Project gallery, in display order
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Skill ring and badges, in display order
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// Contact details
    pub contact: ContactInfo,
    /// Social profile links
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    /// Footer line
    #[serde(default)]
    pub footer: String,
}

impl Default for PortfolioContent {
    fn default() -> Self {
        crate::content::published()
    }
}

/// Viewport coordinates of the pointer, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    /// Horizontal offset from the viewport's left edge
    pub x: f64,
    /// Vertical offset from the viewport's top edge
    pub y: f64,
}

impl PointerPosition {
    /// Construct from raw coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_image_falls_back_to_placeholder() {
        let project = Project {
            title: "x".into(),
            image: "  ".into(),
            ..Default::default()
        };
        assert_eq!(project.image_src(), PLACEHOLDER_IMAGE);

        let project = Project {
            image: "/shots/x.png".into(),
            ..project
        };
        assert_eq!(project.image_src(), "/shots/x.png");
    }

    #[test]
    fn project_link_defaults_to_hash() {
        let project: Project =
            serde_json::from_str(r#"{"title":"a","description":"b"}"#).unwrap();
        assert_eq!(project.link, "#");
        assert!(project.tech.is_empty());
    }

    #[test]
    fn skill_icon_uses_snake_case() {
        let skill: Skill =
            serde_json::from_str(r##"{"name":"Rust","icon":"database","color":"#000000"}"##)
                .unwrap();
        assert_eq!(skill.icon, SkillIcon::Database);
    }
}

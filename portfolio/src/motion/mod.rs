//! Motion math behind the page's animated pieces.
//!
//! Nothing in here touches the DOM. The browser crate feeds raw events into
//! [`PointerTracker`] and [`ScrollProgress`], steps [`SpringFollower`] once per
//! animation frame and asks [`RevealTracker`] whether an intersection is new.
//! Components read the resulting values and the static layouts below.
//!
//! ```text
//! mousemove ──► PointerTracker ──► SpringFollower ──► CursorFollower
//! scroll ─────► ScrollProgress ──► parallax_offset ─► ParticleField
//! skills ─────► ring::layout ────► SkillGlobe
//! ```

pub mod particles;
pub mod pointer;
pub mod reveal;
pub mod ring;
pub mod scroll;
pub mod spring;
pub mod timeline;

pub use particles::{Particle, particle_field};
pub use pointer::{PointerTracker, follower_origin};
pub use reveal::{RevealFrom, RevealTracker};
pub use ring::{OrbitParticle, RingSlot};
pub use scroll::{ScrollProgress, parallax_offset, scroll_fraction};
pub use spring::{SpringConfig, SpringFollower};
pub use timeline::{Easing, LoopAnimation};

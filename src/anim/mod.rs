pub mod ease;
pub mod scroll;
pub mod scrub;
pub mod timeline;
pub mod transform;

pub use ease::Ease;
pub use scroll::{Anchor, Edge, Geometry, ScrollTrigger};
pub use scrub::{Scrub, Smoother};
pub use timeline::{Position, Timeline, Tween};
pub use transform::{Length, Transform};

use log::{warn, Level};
use serde::Deserialize;
use web_sys::Document;

use crate::anim::{Anchor, Ease, Edge, Length, Scrub, ScrollTrigger, Transform, Tween};
use crate::error::PageResult;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Id of the optional inline JSON block that overrides `PageConfig`.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub headline: String,
    pub car_image_url: String,
    /// Height of the scroll wrapper in viewport heights.
    pub scroll_span: f64,
    pub entry: EntryConfig,
    pub transit: ScrollEffectConfig,
    pub fade: ScrollEffectConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct EntryConfig {
    pub chars: Tween,
    pub cards: Tween,
    /// Start of the card tween relative to the end of the character tween.
    pub cards_offset: f64,
}

/// Animates its targets from `Transform::REST` to `to` as the trigger
/// progresses. An override replaces the whole effect, so `to` and `trigger`
/// are required there.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ScrollEffectConfig {
    pub to: Transform,
    pub trigger: ScrollTrigger,
    #[serde(default = "direct_scrub")]
    pub scrub: Scrub,
    #[serde(default)]
    pub ease: Ease,
}

fn direct_scrub() -> Scrub {
    Scrub::DIRECT
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            headline: "WELCOME ITZFIZZ".to_string(),
            car_image_url: "https://pngimg.com/d/porsche_PNG10624.png".to_string(),
            scroll_span: 3.0,
            entry: EntryConfig::default(),
            transit: ScrollEffectConfig::transit(),
            fade: ScrollEffectConfig::fade(),
        }
    }
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            chars: Tween {
                from: Transform {
                    y: Length::percent(150.0),
                    rotation: 5.0,
                    opacity: 0.0,
                    ..Transform::REST
                },
                duration: 1.0,
                stagger: 0.03,
                ease: Ease::ExpoOut,
            },
            cards: Tween {
                from: Transform {
                    y: Length::px(30.0),
                    opacity: 0.0,
                    ..Transform::REST
                },
                duration: 0.8,
                stagger: 0.2,
                ease: Ease::Power1Out,
            },
            cards_offset: -0.6,
        }
    }
}

impl ScrollEffectConfig {
    pub fn transit() -> Self {
        Self {
            to: Transform {
                x: Length::vw(130.0),
                rotation: 10.0,
                scale: 1.4,
                ..Transform::REST
            },
            trigger: ScrollTrigger {
                start: Edge::new(Anchor::TOP, Anchor::TOP),
                end: Edge::new(Anchor::BOTTOM, Anchor::BOTTOM),
            },
            scrub: Scrub::Lag(1.2),
            ease: Ease::None,
        }
    }

    pub fn fade() -> Self {
        Self {
            to: Transform {
                y: Length::px(-50.0),
                opacity: 0.0,
                ..Transform::REST
            },
            trigger: ScrollTrigger {
                start: Edge::new(Anchor(0.7), Anchor::CENTER),
                end: Edge::new(Anchor::BOTTOM, Anchor::BOTTOM),
            },
            scrub: Scrub::DIRECT,
            ease: Ease::Power1Out,
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> PageResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the inline config block if the host page has one. A block that
    /// fails to parse is logged and ignored.
    pub fn from_document(document: &Document) -> Self {
        let Some(json) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }
}

//! The landing page's three effects, as plain functions of time or scroll
//! progress.

use crate::anim::{Position, Timeline, Transform};
use crate::config::{EntryConfig, ScrollEffectConfig};

pub const CHAR_SELECTOR: &str = ".char";
pub const STAT_CARD_SELECTOR: &str = ".stat-card";
pub const HERO_SELECTOR: &str = ".hero-content, .stats-bar";

/// Character reveal followed, with overlap, by the stat cards. Track 0 is
/// the characters, track 1 the cards.
pub fn entry_timeline(config: &EntryConfig, chars: usize, cards: usize) -> Timeline {
    Timeline::new()
        .push(config.chars.clone(), chars, Position::After)
        .push(config.cards.clone(), cards, Position::Offset(config.cards_offset))
}

/// State of a scroll effect's targets at `progress` through its trigger.
pub fn scroll_effect_at(config: &ScrollEffectConfig, progress: f64) -> Transform {
    let eased = config.ease.apply(progress);
    Transform::REST.lerp(&config.to, eased)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::Length;
    use crate::config::PageConfig;

    const CHAR_TRACK: usize = 0;
    const CARD_TRACK: usize = 1;

    fn transit(progress: f64) -> Transform {
        scroll_effect_at(&PageConfig::default().transit, progress)
    }

    fn fade(progress: f64) -> Transform {
        scroll_effect_at(&PageConfig::default().fade, progress)
    }

    #[test]
    fn cards_wait_for_char_overlap_point() {
        let config = EntryConfig::default();
        let tl = entry_timeline(&config, 14, 3);
        let chars_end = tl.tracks()[CHAR_TRACK].end();
        let cards_start = tl.tracks()[CARD_TRACK].start;
        assert!((cards_start - (chars_end - 0.6)).abs() < 1e-9);
        assert_eq!(tl.sample(CARD_TRACK, 0, cards_start), Some(config.cards.from));
    }

    #[test]
    fn entry_without_characters_still_runs_cards() {
        let tl = entry_timeline(&EntryConfig::default(), 0, 3);
        assert!((tl.tracks()[CARD_TRACK].start - 0.4).abs() < 1e-9);
    }

    #[test]
    fn transit_endpoints() {
        assert_eq!(transit(0.0), Transform::REST);
        let end = transit(1.0);
        assert_eq!(end.x, Length::vw(130.0));
        assert_eq!(end.rotation, 10.0);
        assert!((end.scale - 1.4).abs() < 1e-12);
        assert_eq!(end.opacity, 1.0);
    }

    #[test]
    fn transit_midpoint_lies_between() {
        let mid = transit(0.5);
        assert!(0.0 < mid.x.value && mid.x.value < 130.0);
        assert!(0.0 < mid.rotation && mid.rotation < 10.0);
        assert!(1.0 < mid.scale && mid.scale < 1.4);
    }

    #[test]
    fn transit_is_monotonic_and_linear() {
        let samples: Vec<f64> = (0..=20).map(|i| transit(i as f64 / 20.0).x.value).collect();
        assert!(samples.windows(2).all(|w| w[0] < w[1]));
        assert!((transit(0.25).x.value - 32.5).abs() < 1e-9);
    }

    #[test]
    fn fade_bounds() {
        assert_eq!(fade(0.0).opacity, 1.0);
        assert_eq!(fade(0.0).y, Length::ZERO);
        assert_eq!(fade(1.0).opacity, 0.0);
        assert_eq!(fade(1.0).y, Length::px(-50.0));
        let mid = fade(0.5).opacity;
        assert!(0.0 < mid && mid < 1.0);
    }
}

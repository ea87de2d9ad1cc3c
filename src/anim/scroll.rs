//! Scroll trigger geometry.
//!
//! A trigger is two edges, each written `"<element anchor> <viewport anchor>"`
//! (`"top top"`, `"70% center"`, `"bottom bottom"`). An edge is the scroll
//! offset at which the element anchor lines up with the viewport anchor.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// A point along a box, as a fraction of its height from the top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor(pub f64);

impl Anchor {
    pub const TOP: Anchor = Anchor(0.0);
    pub const CENTER: Anchor = Anchor(0.5);
    pub const BOTTOM: Anchor = Anchor(1.0);
}

impl FromStr for Anchor {
    type Err = EdgeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Anchor::TOP),
            "center" => Ok(Anchor::CENTER),
            "bottom" => Ok(Anchor::BOTTOM),
            _ => s
                .strip_suffix('%')
                .and_then(|n| n.trim().parse::<f64>().ok())
                .filter(|n| n.is_finite())
                .map(|n| Anchor(n / 100.0))
                .ok_or_else(|| EdgeParseError(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeParseError(pub String);

impl fmt::Display for EdgeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid trigger edge `{}`", self.0)
    }
}

impl std::error::Error for EdgeParseError {}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Edge {
    pub element: Anchor,
    pub viewport: Anchor,
}

impl Edge {
    pub const fn new(element: Anchor, viewport: Anchor) -> Self {
        Self { element, viewport }
    }

    /// Scroll offset, in document pixels, where this edge is reached.
    pub fn offset(&self, geometry: &Geometry) -> f64 {
        geometry.element_top + self.element.0 * geometry.element_height
            - self.viewport.0 * geometry.viewport_height
    }
}

impl FromStr for Edge {
    type Err = EdgeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(element), Some(viewport), None) => Ok(Edge {
                element: element.parse()?,
                viewport: viewport.parse()?,
            }),
            _ => Err(EdgeParseError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Edge {
    type Error = EdgeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Measured layout of the trigger element, in document coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geometry {
    pub element_top: f64,
    pub element_height: f64,
    pub viewport_height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct ScrollTrigger {
    pub start: Edge,
    pub end: Edge,
}

impl ScrollTrigger {
    pub fn bounds(&self, geometry: &Geometry) -> (f64, f64) {
        (self.start.offset(geometry), self.end.offset(geometry))
    }

    /// Progress through the trigger at `scroll_y`, clamped to `[0, 1]`.
    pub fn progress(&self, scroll_y: f64, geometry: &Geometry) -> f64 {
        let (start, end) = self.bounds(geometry);
        if end <= start {
            return if scroll_y >= end { 1.0 } else { 0.0 };
        }
        ((scroll_y - start) / (end - start)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 800.0;

    // a 300vh wrapper at the top of the page
    fn wrapper() -> Geometry {
        Geometry {
            element_top: 0.0,
            element_height: 3.0 * VH,
            viewport_height: VH,
        }
    }

    fn trigger(start: &str, end: &str) -> ScrollTrigger {
        ScrollTrigger {
            start: start.parse().unwrap(),
            end: end.parse().unwrap(),
        }
    }

    #[test]
    fn parses_keywords_and_percentages() {
        assert_eq!(
            "top top".parse::<Edge>(),
            Ok(Edge::new(Anchor::TOP, Anchor::TOP))
        );
        assert_eq!(
            "70% center".parse::<Edge>(),
            Ok(Edge::new(Anchor(0.7), Anchor::CENTER))
        );
        assert_eq!(
            "  bottom   bottom ".parse::<Edge>(),
            Ok(Edge::new(Anchor::BOTTOM, Anchor::BOTTOM))
        );
    }

    #[test]
    fn rejects_malformed_edges() {
        for bad in ["", "top", "top top top", "middle top", "x% top", "70 top"] {
            assert!(bad.parse::<Edge>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn pinned_region_spans_two_viewports() {
        let t = trigger("top top", "bottom bottom");
        assert_eq!(t.bounds(&wrapper()), (0.0, 2.0 * VH));
        assert_eq!(t.progress(0.0, &wrapper()), 0.0);
        assert_eq!(t.progress(VH, &wrapper()), 0.5);
        assert_eq!(t.progress(2.0 * VH, &wrapper()), 1.0);
    }

    #[test]
    fn progress_clamps_outside_region() {
        let t = trigger("top top", "bottom bottom");
        assert_eq!(t.progress(-100.0, &wrapper()), 0.0);
        assert_eq!(t.progress(10.0 * VH, &wrapper()), 1.0);
    }

    #[test]
    fn seventy_percent_center_start() {
        let t = trigger("70% center", "bottom bottom");
        let (start, end) = t.bounds(&wrapper());
        assert!((start - 1.6 * VH).abs() < 1e-9);
        assert_eq!(end, 2.0 * VH);
        assert_eq!(t.progress(1.5 * VH, &wrapper()), 0.0);
        assert!((t.progress(1.8 * VH, &wrapper()) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn offset_element_moves_bounds() {
        let geometry = Geometry {
            element_top: 500.0,
            ..wrapper()
        };
        let t = trigger("top top", "bottom bottom");
        assert_eq!(t.bounds(&geometry), (500.0, 500.0 + 2.0 * VH));
    }

    #[test]
    fn empty_range_steps_at_end() {
        // wrapper no taller than the viewport
        let geometry = Geometry {
            element_top: 0.0,
            element_height: VH,
            viewport_height: VH,
        };
        let t = trigger("top top", "bottom bottom");
        assert_eq!(t.progress(-1.0, &geometry), 0.0);
        assert_eq!(t.progress(0.0, &geometry), 1.0);
    }

    #[test]
    fn deserializes_from_strings() {
        let t: ScrollTrigger =
            serde_json::from_str(r#"{ "start": "70% center", "end": "bottom bottom" }"#).unwrap();
        assert_eq!(t, trigger("70% center", "bottom bottom"));
        assert!(serde_json::from_str::<ScrollTrigger>(r#"{ "start": "up", "end": "down" }"#)
            .is_err());
    }
}

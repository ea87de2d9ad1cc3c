use std::fmt;

use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Px,
    /// Relative to the element's own box, as CSS `translate` reads it.
    Percent,
    Vw,
}

impl Unit {
    fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Percent => "%",
            Unit::Vw => "vw",
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub const ZERO: Length = Length::px(0.0);

    pub const fn px(value: f64) -> Self {
        Self { value, unit: Unit::Px }
    }

    pub const fn percent(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Percent,
        }
    }

    pub const fn vw(value: f64) -> Self {
        Self { value, unit: Unit::Vw }
    }

    /// Zero takes on the unit of the other end, so `0 -> 130vw` stays in vw.
    /// Two non-zero ends are expected to share a unit; the result uses `to`'s.
    pub fn lerp(self, to: Length, t: f64) -> Length {
        let unit = if to.value == 0.0 { self.unit } else { to.unit };
        Length {
            value: self.value + (to.value - self.value) * t,
            unit,
        }
    }
}

// Zero is zero in any unit.
impl PartialEq for Length {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && (self.unit == other.unit || self.value == 0.0)
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", round(self.value), self.unit.suffix())
    }
}

/// The animatable properties of one element. `Transform::REST` is the
/// element's authored look; tweens move between it and another state.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Transform {
    pub x: Length,
    pub y: Length,
    /// Degrees.
    pub rotation: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl Transform {
    pub const REST: Transform = Transform {
        x: Length::ZERO,
        y: Length::ZERO,
        rotation: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };

    pub fn lerp(&self, to: &Transform, t: f64) -> Transform {
        Transform {
            x: self.x.lerp(to.x, t),
            y: self.y.lerp(to.y, t),
            rotation: self.rotation + (to.rotation - self.rotation) * t,
            scale: self.scale + (to.scale - self.scale) * t,
            opacity: self.opacity + (to.opacity - self.opacity) * t,
        }
    }

    /// Value for the CSS `transform` property.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}, {}) rotate({}deg) scale({})",
            self.x,
            self.y,
            round(self.rotation),
            round(self.scale)
        )
    }

    /// Value for the CSS `opacity` property.
    pub fn css_opacity(&self) -> String {
        round(self.opacity.clamp(0.0, 1.0)).to_string()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::REST
    }
}

// Four decimals; never emits "-0".
fn round(v: f64) -> f64 {
    let r = (v * 10_000.0).round() / 10_000.0;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_end_adopts_other_unit() {
        let out = Length::ZERO.lerp(Length::vw(130.0), 0.5);
        assert_eq!(out, Length::vw(65.0));

        let back = Length::percent(150.0).lerp(Length::ZERO, 0.5);
        assert_eq!(back, Length::percent(75.0));
    }

    #[test]
    fn lerp_hits_both_ends() {
        let from = Transform {
            y: Length::percent(150.0),
            rotation: 5.0,
            opacity: 0.0,
            ..Transform::REST
        };
        assert_eq!(from.lerp(&Transform::REST, 0.0), from);
        let end = from.lerp(&Transform::REST, 1.0);
        assert_eq!(end.y.value, 0.0);
        assert_eq!(end.rotation, 0.0);
        assert_eq!(end.opacity, 1.0);
        assert_eq!(end.scale, 1.0);
    }

    #[test]
    fn css_output() {
        let t = Transform {
            x: Length::vw(130.0),
            rotation: 10.0,
            scale: 1.4,
            ..Transform::REST
        };
        assert_eq!(
            t.css_transform(),
            "translate(130vw, 0px) rotate(10deg) scale(1.4)"
        );
        assert_eq!(t.css_opacity(), "1");
        assert_eq!(Transform::REST.css_transform(), "translate(0px, 0px) rotate(0deg) scale(1)");
    }

    #[test]
    fn css_output_rounds_noise() {
        let t = Transform {
            y: Length::px(-0.000_001),
            opacity: 0.333_333_33,
            ..Transform::REST
        };
        assert_eq!(t.css_transform(), "translate(0px, 0px) rotate(0deg) scale(1)");
        assert_eq!(t.css_opacity(), "0.3333");
    }

    #[test]
    fn partial_config_fills_rest() {
        let t: Transform =
            serde_json::from_str(r#"{ "opacity": 0, "y": { "value": -50, "unit": "px" } }"#)
                .unwrap();
        assert_eq!(t.opacity, 0.0);
        assert_eq!(t.y, Length::px(-50.0));
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.x, Length::ZERO);
    }
}

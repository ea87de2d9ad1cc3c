use serde::Deserialize;

/// Easing curves, named the way timeline configs spell them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
pub enum Ease {
    #[serde(rename = "none")]
    None,
    #[default]
    #[serde(rename = "power1.out")]
    Power1Out,
    #[serde(rename = "power3.out")]
    Power3Out,
    #[serde(rename = "expo.out")]
    ExpoOut,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::None => t,
            Self::Power1Out => 1.0 - (1.0 - t).powi(2),
            Self::Power3Out => 1.0 - (1.0 - t).powi(4),
            Self::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
        }
    }
}

use serde::Deserialize;

use super::ease::Ease;

/// How displayed progress follows raw scroll progress.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scrub {
    /// `true` tracks scroll directly. `false` is accepted and treated the same.
    Instant(bool),
    /// Seconds the display takes to catch up after each scroll.
    Lag(f64),
}

impl Scrub {
    pub const DIRECT: Scrub = Scrub::Instant(true);

    fn lag(self) -> Option<f64> {
        match self {
            Scrub::Lag(secs) if secs > 0.0 => Some(secs),
            _ => None,
        }
    }
}

/// Displayed progress for one scroll binding. A new target starts a
/// `power3.out` catch-up from wherever the display currently is.
#[derive(Clone, Debug, PartialEq)]
pub struct Smoother {
    scrub: Scrub,
    state: Option<Catchup>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Catchup {
    from: f64,
    to: f64,
    started: f64,
}

impl Smoother {
    pub fn new(scrub: Scrub) -> Self {
        Self { scrub, state: None }
    }

    /// Points the display at `target` as of time `now` (seconds). The first
    /// target is taken as-is.
    pub fn retarget(&mut self, target: f64, now: f64) {
        let from = self.value(now).unwrap_or(target);
        self.state = Some(Catchup {
            from,
            to: target,
            started: now,
        });
    }

    pub fn value(&self, now: f64) -> Option<f64> {
        let c = self.state?;
        let Some(lag) = self.scrub.lag() else {
            return Some(c.to);
        };
        let p = ((now - c.started) / lag).clamp(0.0, 1.0);
        Some(c.from + (c.to - c.from) * Ease::Power3Out.apply(p))
    }

    pub fn settled(&self, now: f64) -> bool {
        match (self.state, self.scrub.lag()) {
            (Some(c), Some(lag)) => now - c.started >= lag || c.from == c.to,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_before_first_target() {
        let s = Smoother::new(Scrub::Lag(1.2));
        assert_eq!(s.value(0.0), None);
        assert!(s.settled(0.0));
    }

    #[test]
    fn first_target_snaps() {
        let mut s = Smoother::new(Scrub::Lag(1.2));
        s.retarget(0.4, 10.0);
        assert_eq!(s.value(10.0), Some(0.4));
        assert!(s.settled(10.0));
    }

    #[test]
    fn direct_scrub_tracks_immediately() {
        let mut s = Smoother::new(Scrub::DIRECT);
        s.retarget(0.0, 0.0);
        s.retarget(0.75, 0.1);
        assert_eq!(s.value(0.1), Some(0.75));
        assert!(s.settled(0.1));
    }

    #[test]
    fn lag_trails_then_arrives() {
        let mut s = Smoother::new(Scrub::Lag(1.2));
        s.retarget(0.0, 0.0);
        s.retarget(1.0, 1.0);
        let early = s.value(1.1).unwrap();
        let mid = s.value(1.6).unwrap();
        assert!(0.0 < early && early < mid && mid < 1.0);
        assert!(!s.settled(1.6));
        assert_eq!(s.value(2.2), Some(1.0));
        assert!(s.settled(2.2));
    }

    #[test]
    fn retarget_mid_flight_starts_from_display() {
        let mut s = Smoother::new(Scrub::Lag(1.0));
        s.retarget(0.0, 0.0);
        s.retarget(1.0, 0.0);
        let shown = s.value(0.5).unwrap();
        s.retarget(0.0, 0.5);
        assert_eq!(s.value(0.5), Some(shown));
        assert_eq!(s.value(1.5), Some(0.0));
    }

    #[test]
    fn deserializes_bool_or_seconds() {
        assert_eq!(serde_json::from_str::<Scrub>("true").unwrap(), Scrub::DIRECT);
        assert_eq!(serde_json::from_str::<Scrub>("1.2").unwrap(), Scrub::Lag(1.2));
    }
}

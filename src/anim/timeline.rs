use serde::Deserialize;

use super::ease::Ease;
use super::transform::Transform;

/// A "from" tween: each target starts at `from` and settles at
/// `Transform::REST`, targets starting `stagger` seconds apart.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tween {
    pub from: Transform,
    pub duration: f64,
    pub stagger: f64,
    pub ease: Ease,
}

impl Default for Tween {
    fn default() -> Self {
        Self {
            from: Transform::REST,
            duration: 0.5,
            stagger: 0.0,
            ease: Ease::default(),
        }
    }
}

impl Tween {
    /// Time from the first target starting to the last one settling.
    pub fn span(&self, count: usize) -> f64 {
        self.duration + self.stagger * count.saturating_sub(1) as f64
    }

    /// State of target `index` at `t` seconds into the tween. Before its start
    /// a target holds the `from` state.
    pub fn sample(&self, index: usize, t: f64) -> Transform {
        let local = t - self.stagger * index as f64;
        let p = if self.duration <= 0.0 {
            if local >= 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            (local / self.duration).clamp(0.0, 1.0)
        };
        self.from.lerp(&Transform::REST, self.ease.apply(p))
    }
}

/// Where a tween goes on the timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// Right after the current end.
    After,
    /// Relative to the current end; `Offset(-0.6)` overlaps by 0.6s.
    Offset(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub tween: Tween,
    pub count: usize,
    pub start: f64,
}

impl Track {
    pub fn end(&self) -> f64 {
        self.start + self.tween.span(self.count)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    tracks: Vec<Track>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a tween over `count` targets. Positions before zero clamp to
    /// zero.
    pub fn push(mut self, tween: Tween, count: usize, position: Position) -> Self {
        let end = self.duration();
        let start = match position {
            Position::After => end,
            Position::Offset(by) => end + by,
        }
        .max(0.0);
        self.tracks.push(Track { tween, count, start });
        self
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn duration(&self) -> f64 {
        self.tracks.iter().map(Track::end).fold(0.0, f64::max)
    }

    /// State of target `index` on track `track` at timeline time `t`.
    pub fn sample(&self, track: usize, index: usize, t: f64) -> Option<Transform> {
        let track = self.tracks.get(track)?;
        (index < track.count).then(|| track.tween.sample(index, t - track.start))
    }
}

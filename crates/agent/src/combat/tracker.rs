//! Enemy position tracking.
//!
//! The server only ever reports "enemy straight ahead at distance d", so an
//! enemy's absolute position is estimated by projecting `d` cells along our
//! facing. Sightings carry no identity. Instead each estimate joins the
//! nearest live track within a small Manhattan radius, or opens a new one.
//! Tracks that go unrefreshed for longer than the TTL are dropped.

use arena_core::{Coordinate, Direction};

/// Opaque handle to one enemy track. Only meaningful for the tracker that
/// issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrackId(u32);

/// Last estimate for one enemy plus its velocity, if two timed estimates exist.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemyTrack {
    pub id: TrackId,
    pub position: Coordinate,
    pub seen_at_secs: u32,
    /// Cells per second along (x, y).
    pub velocity: Option<(f64, f64)>,
}

impl EnemyTrack {
    /// Speed component perpendicular to `facing`.
    pub fn lateral_speed(&self, facing: Direction) -> Option<f64> {
        let (vx, vy) = self.velocity?;
        Some(if facing.is_vertical() { vx.abs() } else { vy.abs() })
    }
}

/// Recommendation for a visible enemy with a clear line of fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ShotCall {
    Fire,
    /// Likely miss; close the distance instead.
    Reposition,
}

#[derive(Clone, Debug)]
pub struct EnemyTracker {
    tracks: Vec<EnemyTrack>,
    next_id: u32,
    match_radius: u32,
    ttl_secs: u32,
}

impl EnemyTracker {
    pub fn new(match_radius: u32, ttl_secs: u32) -> Self {
        Self {
            tracks: Vec::new(),
            next_id: 0,
            match_radius,
            ttl_secs,
        }
    }

    /// Folds one sighting into the track set and returns the track it joined.
    pub fn observe(
        &mut self,
        origin: Coordinate,
        facing: Direction,
        distance: u32,
        now_secs: u32,
    ) -> TrackId {
        let steps = i32::try_from(distance).unwrap_or(i32::MAX);
        let estimate = origin.ahead(facing, steps);
        self.expire(now_secs);

        let radius = self.match_radius;
        let matched = self
            .tracks
            .iter_mut()
            .filter(|track| track.position.manhattan(estimate) <= radius)
            .min_by_key(|track| (track.position.manhattan(estimate), track.id));

        if let Some(track) = matched {
            let dt = now_secs.saturating_sub(track.seen_at_secs);
            if dt > 0 {
                let dt = f64::from(dt);
                let vx = (f64::from(estimate.x) - f64::from(track.position.x)) / dt;
                let vy = (f64::from(estimate.y) - f64::from(track.position.y)) / dt;
                track.velocity = Some((vx, vy));
                tracing::debug!(
                    "enemy track {:?} moved to {} at ({:.2}, {:.2}) cells/s",
                    track.id,
                    estimate,
                    vx,
                    vy
                );
            }
            track.position = estimate;
            track.seen_at_secs = now_secs;
            return track.id;
        }

        let id = TrackId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.tracks.push(EnemyTrack {
            id,
            position: estimate,
            seen_at_secs: now_secs,
            velocity: None,
        });
        tracing::debug!("new enemy track {:?} at {}", id, estimate);
        id
    }

    /// Decides whether a shot at `distance` is worth taking.
    ///
    /// Without a velocity estimate the answer is always [`ShotCall::Fire`].
    /// A target moving sideways faster than `lateral_threshold` is only shot
    /// at within `close_range`.
    pub fn predict_interception(
        &self,
        track: Option<TrackId>,
        facing: Direction,
        distance: u32,
        lateral_threshold: f64,
        close_range: u32,
    ) -> ShotCall {
        let lateral = track
            .and_then(|id| self.get(id))
            .and_then(|track| track.lateral_speed(facing));

        match lateral {
            Some(speed) if speed > lateral_threshold && distance > close_range => {
                ShotCall::Reposition
            }
            _ => ShotCall::Fire,
        }
    }

    pub fn get(&self, id: TrackId) -> Option<&EnemyTrack> {
        self.tracks.iter().find(|track| track.id == id)
    }

    pub fn tracks(&self) -> &[EnemyTrack] {
        &self.tracks
    }

    fn expire(&mut self, now_secs: u32) {
        let ttl = self.ttl_secs;
        self.tracks
            .retain(|track| now_secs.saturating_sub(track.seen_at_secs) <= ttl);
    }
}

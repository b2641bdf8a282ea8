use std::f64::consts::PI;

use crate::animation::{TimerQueue, progress};
use crate::foundation::core::{Depth, Point3D, Rotation};
use crate::foundation::math::Rng64;
use crate::illustrations::sphere::config::SphereConfig;
use crate::transform::rotate_point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LineState {
    Appearing,
    Active,
    Disappearing,
}

/// Lifecycle record for one radial line.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SphereLine {
    pub id: u64,
    pub state: LineState,
    pub opacity: f64,
    /// Fraction of the radius the line reaches, in `[0.5, 1]`.
    pub length_progress: f64,
    pub created_at: f64,
    pub fade_start_time: Option<f64>,
}

/// Population-control tasks scheduled on the model's timer queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineTask {
    AddLine,
    RemoveLine,
}

// A canonical point and its line live and die together.
#[derive(Clone, Debug)]
struct Tracked {
    point: Point3D,
    line: SphereLine,
}

/// Snapshot entry handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpherePoint {
    pub id: u64,
    /// Rotated position.
    pub point: Point3D,
    pub line: SphereLine,
}

impl Depth for SpherePoint {
    fn depth(&self) -> Option<f64> {
        Some(self.point.z)
    }
}

/// Rotating point cloud with an appear/active/disappear lifecycle per line.
#[derive(Debug)]
pub struct SphereModel {
    config: SphereConfig,
    tracked: Vec<Tracked>,
    rotation: Rotation,
    next_id: u64,
    timers: TimerQueue<LineTask>,
    rng: Rng64,
    initialized: bool,
}

impl SphereModel {
    pub fn new(config: SphereConfig) -> Self {
        let rng = Rng64::new(config.seed);
        Self {
            config,
            tracked: Vec::new(),
            rotation: Rotation::default(),
            next_id: 0,
            timers: TimerQueue::new(),
            rng,
            initialized: false,
        }
    }

    /// Seed the golden-angle point set as active lines created at `now`.
    pub fn initialize(&mut self, now: f64) {
        let points = golden_angle_points(self.config.num_points, self.config.radius);
        self.tracked = points
            .into_iter()
            .enumerate()
            .map(|(i, point)| Tracked {
                point,
                line: SphereLine {
                    id: i as u64,
                    state: LineState::Active,
                    opacity: 1.0,
                    length_progress: 1.0,
                    created_at: now,
                    fade_start_time: None,
                },
            })
            .collect();
        self.next_id = self.tracked.len() as u64;
        self.rotation = Rotation::default();
        self.initialized = true;
        tracing::debug!(points = self.tracked.len(), "sphere seeded");
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Arm both population-control tasks relative to `now`.
    pub fn start_line_management(&mut self, now: f64) {
        self.timers.clear();
        self.schedule(LineTask::AddLine, now);
        self.schedule(LineTask::RemoveLine, now);
    }

    pub fn stop_line_management(&mut self) {
        self.timers.clear();
    }

    pub fn pending_tasks(&self) -> usize {
        self.timers.len()
    }

    /// Run every task due at or before `now`, each as of its own scheduled time.
    pub fn run_due_tasks(&mut self, now: f64) {
        while let Some(fired) = self.timers.pop_due(now) {
            match fired.action {
                LineTask::AddLine => self.add_new_line(fired.fire_at),
                LineTask::RemoveLine => self.remove_random_line(fired.fire_at),
            }
        }
    }

    pub fn update_rotation_angles(&mut self) {
        self.rotation.accumulate(self.config.rotation_speed);
    }

    /// Advance fades to `now`, dropping lines whose disappearing fade has completed.
    pub fn update_line_opacities(&mut self, now: f64) {
        let fade = self.config.line_config.fade_duration;
        for t in &mut self.tracked {
            let line = &mut t.line;
            match line.state {
                LineState::Appearing => {
                    let start = *line.fade_start_time.get_or_insert(now);
                    let p = progress(now - start, fade);
                    line.opacity = p;
                    line.length_progress = 0.5 + 0.5 * p;
                    if p >= 1.0 {
                        line.state = LineState::Active;
                        line.fade_start_time = None;
                        line.length_progress = 1.0;
                    }
                }
                LineState::Disappearing => {
                    let start = *line.fade_start_time.get_or_insert(now);
                    let p = progress(now - start, fade);
                    line.opacity = 1.0 - p;
                    line.length_progress = 1.0 - 0.5 * p;
                }
                LineState::Active => line.length_progress = 1.0,
            }
        }

        let before = self.tracked.len();
        self.tracked.retain(|t| {
            !(t.line.state == LineState::Disappearing
                && t.line
                    .fade_start_time
                    .is_some_and(|start| progress(now - start, fade) >= 1.0))
        });
        let removed = before - self.tracked.len();
        if removed > 0 {
            tracing::debug!(removed, remaining = self.tracked.len(), "sphere lines removed");
        }
    }

    /// Add a uniformly sampled point unless the visible population is at the cap.
    pub fn add_new_line(&mut self, now: f64) {
        let visible = self.count(|s| s != LineState::Disappearing);
        if visible < self.config.line_config.max_lines {
            let point = random_sphere_point(&mut self.rng, self.config.radius);
            let id = self.next_id;
            self.next_id += 1;
            self.tracked.push(Tracked {
                point,
                line: SphereLine {
                    id,
                    state: LineState::Appearing,
                    opacity: 0.0,
                    length_progress: 0.5,
                    created_at: now,
                    fade_start_time: Some(now),
                },
            });
            tracing::debug!(id, "sphere line added");
        }
        self.schedule(LineTask::AddLine, now);
    }

    /// Start fading out a random settled line unless the population is at the floor.
    pub fn remove_random_line(&mut self, now: f64) {
        let live = self.count(|s| matches!(s, LineState::Active | LineState::Appearing));
        if live > self.config.line_config.min_lines {
            let min_age = self.config.line_config.fade_duration * 2.0;
            let candidates: Vec<usize> = self
                .tracked
                .iter()
                .enumerate()
                .filter(|(_, t)| t.line.state == LineState::Active && now - t.line.created_at > min_age)
                .map(|(i, _)| i)
                .collect();
            if !candidates.is_empty() {
                let pick = candidates[self.rng.index(candidates.len())];
                let line = &mut self.tracked[pick].line;
                line.state = LineState::Disappearing;
                line.fade_start_time = Some(now);
                tracing::debug!(id = line.id, "sphere line disappearing");
            }
        }
        self.schedule(LineTask::RemoveLine, now);
    }

    /// Force a specific line into its disappearing fade.
    pub fn mark_disappearing(&mut self, id: u64, now: f64) -> bool {
        match self.tracked.iter_mut().find(|t| t.line.id == id) {
            Some(t) if t.line.state != LineState::Disappearing => {
                t.line.state = LineState::Disappearing;
                t.line.fade_start_time = Some(now);
                true
            }
            _ => false,
        }
    }

    /// Rotated points paired with their line records, in insertion order.
    pub fn get_points_for_render(&self) -> Vec<SpherePoint> {
        self.tracked
            .iter()
            .map(|t| SpherePoint {
                id: t.line.id,
                point: rotate_point(t.point, self.rotation),
                line: t.line,
            })
            .collect()
    }

    pub fn lines(&self) -> impl Iterator<Item = &SphereLine> {
        self.tracked.iter().map(|t| &t.line)
    }

    pub fn line(&self, id: u64) -> Option<&SphereLine> {
        self.lines().find(|l| l.id == id)
    }

    /// Canonical (unrotated) points.
    pub fn original_points(&self) -> impl Iterator<Item = (u64, Point3D)> + '_ {
        self.tracked.iter().map(|t| (t.line.id, t.point))
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn config(&self) -> &SphereConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }

    /// Lines not fading out.
    pub fn visible_count(&self) -> usize {
        self.count(|s| s != LineState::Disappearing)
    }

    fn count(&self, pred: impl Fn(LineState) -> bool) -> usize {
        self.tracked.iter().filter(|t| pred(t.line.state)).count()
    }

    fn schedule(&mut self, task: LineTask, now: f64) {
        let lc = &self.config.line_config;
        let (min, max) = match task {
            LineTask::AddLine => (lc.add_interval_min, lc.add_interval_max),
            LineTask::RemoveLine => (lc.remove_interval_min, lc.remove_interval_max),
        };
        let delay = self.rng.range_f64(min, max);
        self.timers.schedule(now + delay, task);
    }
}

/// Even spherical coverage from the golden angle. A single point sits on the equator.
pub fn golden_angle_points(n: usize, radius: f64) -> Vec<Point3D> {
    let golden = PI * (3.0 - 5f64.sqrt());
    (0..n)
        .map(|i| {
            let y = if n > 1 {
                1.0 - (i as f64 / (n - 1) as f64) * 2.0
            } else {
                0.0
            };
            let radius_at_y = (1.0 - y * y).max(0.0).sqrt();
            let theta = golden * i as f64;
            Point3D::new(
                theta.cos() * radius_at_y * radius,
                y * radius,
                theta.sin() * radius_at_y * radius,
            )
        })
        .collect()
}

/// Uniform sample on the sphere surface via an inverse-cosine polar angle.
pub fn random_sphere_point(rng: &mut Rng64, radius: f64) -> Point3D {
    let theta = rng.next_f64_01() * 2.0 * PI;
    let phi = (2.0 * rng.next_f64_01() - 1.0).acos();
    Point3D::new(
        phi.sin() * theta.cos() * radius,
        phi.cos() * radius,
        phi.sin() * theta.sin() * radius,
    )
}

#[cfg(test)]
#[path = "../../../tests/unit/illustrations/sphere_model.rs"]
mod tests;

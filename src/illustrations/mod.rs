//! The illustration catalogue: a model, a renderer and a controller per kind.
//!
//! Each controller drives the same per-frame sequence on [`Illustration::tick`]: apply a
//! debounced resize if one is due, advance the model's state machine, then let the renderer
//! project, depth-sort and draw. Renderers only read the model.

use std::fmt;
use std::str::FromStr;

use crate::animation::AnimationLoop;
use crate::foundation::error::{IllustraError, IllustraResult};
use crate::render::{Container, FrameRGBA};

pub mod layered_house;
pub mod sphere;
pub mod splash;

/// Type tag used to pick a controller at construction time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IllustrationKind {
    Sphere,
    LayeredHouse,
    Splash,
}

impl IllustrationKind {
    pub const ALL: [Self; 3] = [Self::Sphere, Self::LayeredHouse, Self::Splash];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::LayeredHouse => "layered-house",
            Self::Splash => "splash",
        }
    }
}

impl fmt::Display for IllustrationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IllustrationKind {
    type Err = IllustraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| IllustraError::config(format!("unknown illustration type \"{s}\"")))
    }
}

/// What a single frame produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Drawn,
    /// A required color was unavailable; the surface keeps its previous contents.
    Skipped,
    /// Geometry has not been loaded yet.
    NotLoaded,
    /// No frame was due (the loop is stopped).
    Idle,
}

/// Per-variant drawing capability.
pub trait IllustrationRenderer {
    type Model;

    /// Size the surface(s) to the current container(s).
    fn setup_canvas(&mut self) -> IllustraResult<()>;

    fn clear(&mut self);

    /// Draw one frame from a model snapshot.
    fn render(&mut self, model: &Self::Model) -> FrameOutcome;
}

/// Object-safe controller surface shared by every illustration kind.
pub trait Illustration {
    fn kind(&self) -> IllustrationKind;

    /// Load geometry if needed, size the surfaces and arm the frame loop. Idempotent.
    fn start(&mut self, now: f64) -> IllustraResult<()>;

    /// Cancel the frame loop, any pending resize and any timers. Idempotent.
    fn stop(&mut self);

    /// Run one display refresh at `now` (milliseconds).
    fn tick(&mut self, now: f64) -> IllustraResult<FrameOutcome>;

    /// Report a new container box; applied after the resize debounce while running.
    fn resize(&mut self, container: Container, now: f64);

    fn is_running(&self) -> bool;

    fn is_loaded(&self) -> bool;

    /// Rasterize the current contents of every surface, primary first.
    fn read_frames(&mut self) -> IllustraResult<Vec<FrameRGBA>>;
}

/// Frame loop plus the container change waiting for its debounce window.
#[derive(Debug)]
pub(crate) struct Lifecycle<P> {
    animation: AnimationLoop,
    pending: Option<P>,
}

impl<P> Default for Lifecycle<P> {
    fn default() -> Self {
        Self {
            animation: AnimationLoop::new(),
            pending: None,
        }
    }
}

impl<P> Lifecycle<P> {
    pub(crate) fn start(&mut self) -> bool {
        self.animation.start()
    }

    pub(crate) fn stop(&mut self) -> bool {
        self.pending = None;
        self.animation.stop()
    }

    pub(crate) fn is_running(&self) -> bool {
        self.animation.is_running()
    }

    /// Queue `change` behind the debounce while running; hand it straight back otherwise.
    pub(crate) fn request_resize(&mut self, change: P, now: f64) -> Option<P> {
        if !self.animation.is_running() {
            return Some(change);
        }
        self.pending = Some(change);
        self.animation.notify_resize(now);
        None
    }

    pub(crate) fn due_resize(&mut self, now: f64) -> Option<P> {
        if self.animation.take_resize(now) {
            self.pending.take()
        } else {
            None
        }
    }

    pub(crate) fn take_frame(&mut self) -> bool {
        self.animation.take_frame().is_some()
    }
}

//! Flat shapes at staggered depths, swaying under perspective and trading places.

pub mod config;
pub mod model;
pub mod renderer;

pub use config::{
    DEFAULT_Z_COORDINATES, DEPTH_POOL_SIZE, OBJECT_CLASS, PAIRED_MIN_SIZE,
    SPLASH_AUTO_SCALE_FACTOR, SPLASH_DEFAULT_VIEW_BOX, SPLASH_REFERENCE_DISTANCE, SplashConfig,
};
pub use model::{
    DepthChange, RenderObject, SplashModel, SplashObject, SplashObjectKind, sway_angle,
};
pub use renderer::{FILL_ALPHA, SplashRenderer, SurfaceLayout, SurfaceSlot};

use crate::assets::ShapeSource;
use crate::foundation::error::IllustraResult;
use crate::illustrations::{
    FrameOutcome, Illustration, IllustrationKind, IllustrationRenderer, Lifecycle,
};
use crate::render::{Container, FrameRGBA, Surface};

type ContainerChange = (Container, Option<Container>);

pub struct SplashIllustration<S> {
    model: SplashModel,
    renderer: SplashRenderer<S>,
    source: Box<dyn ShapeSource>,
    lifecycle: Lifecycle<ContainerChange>,
}

impl<S: Surface> SplashIllustration<S> {
    pub fn new(
        layout: SurfaceLayout<S>,
        config: SplashConfig,
        source: Box<dyn ShapeSource>,
    ) -> IllustraResult<Self> {
        config.validate()?;
        Ok(Self {
            model: SplashModel::new(config.clone()),
            renderer: SplashRenderer::new(layout, config),
            source,
            lifecycle: Lifecycle::default(),
        })
    }

    pub fn model(&self) -> &SplashModel {
        &self.model
    }

    pub fn renderer(&self) -> &SplashRenderer<S> {
        &self.renderer
    }

    /// Report new boxes for both surfaces of a paired layout.
    pub fn resize_paired(&mut self, primary: Container, secondary: Container, now: f64) {
        self.request((primary, Some(secondary)), now);
    }

    fn request(&mut self, change: ContainerChange, now: f64) {
        if let Some(change) = self.lifecycle.request_resize(change, now)
            && let Err(err) = self.apply(change)
        {
            tracing::warn!(%err, "splash resize failed");
        }
    }

    fn apply(&mut self, (primary, secondary): ContainerChange) -> IllustraResult<()> {
        self.renderer.set_containers(primary, secondary);
        self.renderer.setup_canvas()
    }

    #[tracing::instrument(skip(self), fields(source = %self.source.describe()))]
    fn load(&mut self) -> IllustraResult<()> {
        let text = self.source.load()?;
        self.model.load_text(&text)
    }
}

impl<S> std::fmt::Debug for SplashIllustration<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplashIllustration")
            .field("source", &self.source.describe())
            .field("loaded", &self.model.is_loaded())
            .field("running", &self.lifecycle.is_running())
            .finish_non_exhaustive()
    }
}

impl<S: Surface> Illustration for SplashIllustration<S> {
    fn kind(&self) -> IllustrationKind {
        IllustrationKind::Splash
    }

    fn start(&mut self, _now: f64) -> IllustraResult<()> {
        if self.lifecycle.is_running() {
            return Ok(());
        }
        if !self.model.is_loaded() {
            self.load()?;
        }
        self.renderer.setup_canvas()?;
        self.lifecycle.start();
        tracing::info!(paired = self.renderer.is_paired(), "splash started");
        Ok(())
    }

    fn stop(&mut self) {
        if self.lifecycle.stop() {
            tracing::info!("splash stopped");
        }
    }

    fn tick(&mut self, now: f64) -> IllustraResult<FrameOutcome> {
        if let Some(change) = self.lifecycle.due_resize(now) {
            self.apply(change)?;
        }
        if !self.lifecycle.take_frame() {
            return Ok(FrameOutcome::Idle);
        }
        self.model.update(now);
        Ok(self.renderer.render(&self.model))
    }

    /// Resizes the primary surface; paired layouts keep their secondary box.
    fn resize(&mut self, container: Container, now: f64) {
        self.request((container, None), now);
    }

    fn is_running(&self) -> bool {
        self.lifecycle.is_running()
    }

    fn is_loaded(&self) -> bool {
        self.model.is_loaded()
    }

    fn read_frames(&mut self) -> IllustraResult<Vec<FrameRGBA>> {
        self.renderer.read_frames()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/illustrations/splash.rs"]
mod tests;

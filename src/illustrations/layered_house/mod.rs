//! Five stacked copies of a house silhouette, each swinging in its own plane.

pub mod config;
pub mod model;
pub mod renderer;

pub use config::{
    FILL_CLASS, HOUSE_AUTO_SCALE_BOOST, HOUSE_DEFAULT_VIEW_BOX, HOUSE_PROJECTION_CENTER,
    LAYER_COUNT, LayeredHouseConfig, STROKE_CLASS,
};
pub use model::{
    HouseGeometry, HouseLayer, LayerAnimation, LayerPhase, LayeredHouseModel, auto_scale,
    layer_pose,
};
pub use renderer::{FILL_ALPHA, LayeredHouseRenderer};

use crate::assets::ShapeSource;
use crate::foundation::error::IllustraResult;
use crate::illustrations::{
    FrameOutcome, Illustration, IllustrationKind, IllustrationRenderer, Lifecycle,
};
use crate::render::{Container, FrameRGBA, Surface};

pub struct LayeredHouseIllustration<S> {
    model: LayeredHouseModel,
    renderer: LayeredHouseRenderer<S>,
    source: Box<dyn ShapeSource>,
    lifecycle: Lifecycle<Container>,
}

impl<S: Surface> LayeredHouseIllustration<S> {
    /// Validate `config`; the silhouette is read from `source` on the first start.
    pub fn new(
        surface: S,
        container: Container,
        config: LayeredHouseConfig,
        source: Box<dyn ShapeSource>,
    ) -> IllustraResult<Self> {
        config.validate()?;
        Ok(Self {
            model: LayeredHouseModel::new(config.clone()),
            renderer: LayeredHouseRenderer::new(surface, container, config),
            source,
            lifecycle: Lifecycle::default(),
        })
    }

    pub fn model(&self) -> &LayeredHouseModel {
        &self.model
    }

    pub fn renderer(&self) -> &LayeredHouseRenderer<S> {
        &self.renderer
    }

    /// Change the view rotation (degrees) and layer spacing, redrawing immediately.
    ///
    /// Ignored until the silhouette has loaded.
    pub fn set_rotation(&mut self, x: f64, y: f64, z: f64, layer_spacing: f64) -> FrameOutcome {
        if !self.model.is_loaded() {
            return FrameOutcome::NotLoaded;
        }
        self.model.set_rotation(x, y, z, layer_spacing);
        self.renderer.render(&self.model)
    }

    #[tracing::instrument(skip(self), fields(source = %self.source.describe()))]
    fn load(&mut self) -> IllustraResult<()> {
        let text = self.source.load()?;
        self.model.load_text(&text)
    }

    fn apply_container(&mut self, container: Container) -> IllustraResult<()> {
        self.renderer.base_mut().set_container(container);
        self.renderer.setup_canvas()
    }
}

impl<S> std::fmt::Debug for LayeredHouseIllustration<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayeredHouseIllustration")
            .field("source", &self.source.describe())
            .field("loaded", &self.model.is_loaded())
            .field("running", &self.lifecycle.is_running())
            .finish_non_exhaustive()
    }
}

impl<S: Surface> Illustration for LayeredHouseIllustration<S> {
    fn kind(&self) -> IllustrationKind {
        IllustrationKind::LayeredHouse
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
        tracing::info!("layered house started");
        Ok(())
    }

    fn stop(&mut self) {
        if self.lifecycle.stop() {
            tracing::info!("layered house stopped");
        }
    }

    fn tick(&mut self, now: f64) -> IllustraResult<FrameOutcome> {
        if let Some(container) = self.lifecycle.due_resize(now) {
            self.apply_container(container)?;
        }
        if !self.lifecycle.take_frame() {
            return Ok(FrameOutcome::Idle);
        }
        self.model.update_animations(now);
        Ok(self.renderer.render(&self.model))
    }

    fn resize(&mut self, container: Container, now: f64) {
        if let Some(container) = self.lifecycle.request_resize(container, now)
            && let Err(err) = self.apply_container(container)
        {
            tracing::warn!(%err, "layered house resize failed");
        }
    }

    fn is_running(&self) -> bool {
        self.lifecycle.is_running()
    }

    fn is_loaded(&self) -> bool {
        self.model.is_loaded()
    }

    fn read_frames(&mut self) -> IllustraResult<Vec<FrameRGBA>> {
        Ok(self
            .renderer
            .base_mut()
            .surface_mut()
            .read_pixels()?
            .into_iter()
            .collect())
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/illustrations/layered_house.rs"]
mod tests;

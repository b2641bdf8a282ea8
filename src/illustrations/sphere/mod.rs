//! Rotating sphere of radial lines whose population breathes over time.

pub mod config;
pub mod model;
pub mod renderer;

pub use config::{DEFAULT_ACCENT_VAR, LineConfig, SphereConfig};
pub use model::{LineState, LineTask, SphereLine, SphereModel, SpherePoint};
pub use renderer::SphereRenderer;

use crate::foundation::error::IllustraResult;
use crate::illustrations::{
    FrameOutcome, Illustration, IllustrationKind, IllustrationRenderer, Lifecycle,
};
use crate::render::{Container, FrameRGBA, Surface};

/// Controller tying the sphere model, its renderer and the frame loop together.
#[derive(Debug)]
pub struct SphereIllustration<S> {
    model: SphereModel,
    renderer: SphereRenderer<S>,
    lifecycle: Lifecycle<Container>,
}

impl<S: Surface> SphereIllustration<S> {
    /// Validate `config` and bind the illustration to `surface`.
    pub fn new(surface: S, container: Container, config: SphereConfig) -> IllustraResult<Self> {
        config.validate()?;
        Ok(Self {
            model: SphereModel::new(config.clone()),
            renderer: SphereRenderer::new(surface, container, config),
            lifecycle: Lifecycle::default(),
        })
    }

    pub fn model(&self) -> &SphereModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut SphereModel {
        &mut self.model
    }

    pub fn renderer(&self) -> &SphereRenderer<S> {
        &self.renderer
    }

    fn apply_container(&mut self, container: Container) -> IllustraResult<()> {
        self.renderer.base_mut().set_container(container);
        self.renderer.setup_canvas()
    }
}

impl<S: Surface> Illustration for SphereIllustration<S> {
    fn kind(&self) -> IllustrationKind {
        IllustrationKind::Sphere
    }

    fn start(&mut self, now: f64) -> IllustraResult<()> {
        if self.lifecycle.is_running() {
            return Ok(());
        }
        self.renderer.setup_canvas()?;
        if !self.model.is_initialized() {
            self.model.initialize(now);
        }
        self.model.start_line_management(now);
        self.lifecycle.start();
        tracing::info!(points = self.model.len(), "sphere started");
        Ok(())
    }

    fn stop(&mut self) {
        self.model.stop_line_management();
        if self.lifecycle.stop() {
            tracing::info!("sphere stopped");
        }
    }

    fn tick(&mut self, now: f64) -> IllustraResult<FrameOutcome> {
        if let Some(container) = self.lifecycle.due_resize(now) {
            self.apply_container(container)?;
        }
        if !self.lifecycle.take_frame() {
            return Ok(FrameOutcome::Idle);
        }
        self.model.run_due_tasks(now);
        self.model.update_rotation_angles();
        self.model.update_line_opacities(now);
        Ok(self.renderer.render(&self.model))
    }

    fn resize(&mut self, container: Container, now: f64) {
        if let Some(container) = self.lifecycle.request_resize(container, now)
            && let Err(err) = self.apply_container(container)
        {
            tracing::warn!(%err, "sphere resize failed");
        }
    }

    fn is_running(&self) -> bool {
        self.lifecycle.is_running()
    }

    fn is_loaded(&self) -> bool {
        self.model.is_initialized()
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
#[path = "../../../tests/unit/illustrations/sphere.rs"]
mod tests;

//! Owned collection of illustration instances with an explicit lifecycle.
//!
//! A [`Declaration`] names a type and carries its container and JSON configuration; the
//! registry looks the type up, builds the controller and keeps it under an [`InstanceId`].
//! Failures are logged and confined to the instance that produced them.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use crate::assets::{FileShapeSource, InlineShapeSource, ShapeSource};
use crate::foundation::error::{IllustraError, IllustraResult};
use crate::illustrations::layered_house::{LayeredHouseConfig, LayeredHouseIllustration};
use crate::illustrations::sphere::{SphereConfig, SphereIllustration};
use crate::illustrations::splash::{
    SplashConfig, SplashIllustration, SurfaceLayout, SurfaceSlot,
};
use crate::illustrations::{FrameOutcome, Illustration, IllustrationKind};
use crate::render::{Container, CpuSurface};

/// Type used when a declaration names none.
pub const DEFAULT_TYPE: &str = "sphere";

/// Handle for a created instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(pub u64);

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "illustration-{}", self.0)
    }
}

/// Where an instance's flat shape description comes from.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeRef {
    File(PathBuf),
    Inline(String),
}

impl ShapeRef {
    pub fn to_source(&self) -> Box<dyn ShapeSource> {
        match self {
            Self::File(path) => Box::new(FileShapeSource::new(path.clone())),
            Self::Inline(text) => Box::new(InlineShapeSource::new(text.clone())),
        }
    }
}

/// One illustration as declared by the host.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Declaration {
    #[serde(rename = "type")]
    pub type_name: String,
    pub container: Container,
    /// Type-specific configuration, deserialized by the constructor.
    pub config: serde_json::Value,
    pub shape: Option<ShapeRef>,
    /// Second container; selects the paired layout where the type supports one.
    pub paired: Option<Container>,
}

impl Default for Declaration {
    fn default() -> Self {
        Self {
            type_name: DEFAULT_TYPE.to_owned(),
            container: Container::default(),
            config: serde_json::Value::Object(Default::default()),
            shape: None,
            paired: None,
        }
    }
}

impl Declaration {
    pub fn new(kind: IllustrationKind, container: Container) -> Self {
        Self {
            type_name: kind.as_str().to_owned(),
            container,
            ..Self::default()
        }
    }

    pub fn with_config(mut self, config: serde_json::Value) -> Self {
        self.config = config;
        self
    }

    pub fn with_shape(mut self, shape: ShapeRef) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn with_paired(mut self, container: Container) -> Self {
        self.paired = Some(container);
        self
    }

    /// Deserialize the typed configuration; `null` counts as all defaults.
    pub fn typed_config<T>(&self) -> IllustraResult<T>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        if self.config.is_null() {
            return Ok(T::default());
        }
        serde_json::from_value(self.config.clone())
            .map_err(|e| IllustraError::config(format!("invalid {} config: {e}", self.type_name)))
    }

    fn shape_source(&self) -> IllustraResult<Box<dyn ShapeSource>> {
        self.shape
            .as_ref()
            .map(ShapeRef::to_source)
            .ok_or_else(|| IllustraError::config(format!("{} needs a shape", self.type_name)))
    }
}

pub type Constructor = Box<dyn Fn(&Declaration) -> IllustraResult<Box<dyn Illustration>>>;

/// Type-name to constructor map plus the live instances it created.
#[derive(Default)]
pub struct IllustrationRegistry {
    constructors: HashMap<String, Constructor>,
    instances: BTreeMap<InstanceId, Box<dyn Illustration>>,
    next_id: u64,
}

impl IllustrationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in type drawing onto [`CpuSurface`]s.
    pub fn with_cpu_defaults() -> Self {
        let mut reg = Self::new();
        reg.register(IllustrationKind::Sphere.as_str(), |decl| {
            let config: SphereConfig = decl.typed_config()?;
            Ok(Box::new(SphereIllustration::new(
                CpuSurface::new(),
                decl.container.clone(),
                config,
            )?))
        });
        reg.register(IllustrationKind::LayeredHouse.as_str(), |decl| {
            let config: LayeredHouseConfig = decl.typed_config()?;
            Ok(Box::new(LayeredHouseIllustration::new(
                CpuSurface::new(),
                decl.container.clone(),
                config,
                decl.shape_source()?,
            )?))
        });
        reg.register(IllustrationKind::Splash.as_str(), |decl| {
            let config: SplashConfig = decl.typed_config()?;
            let primary = SurfaceSlot::new(CpuSurface::new(), decl.container.clone());
            let layout = match &decl.paired {
                Some(second) => SurfaceLayout::Paired {
                    primary,
                    secondary: SurfaceSlot::new(CpuSurface::new(), second.clone()),
                },
                None => SurfaceLayout::Single(primary),
            };
            Ok(Box::new(SplashIllustration::new(
                layout,
                config,
                decl.shape_source()?,
            )?))
        });
        reg
    }

    /// Register (or replace) the constructor for `type_name`.
    pub fn register<F>(&mut self, type_name: &str, constructor: F)
    where
        F: Fn(&Declaration) -> IllustraResult<Box<dyn Illustration>> + 'static,
    {
        self.constructors
            .insert(type_name.to_owned(), Box::new(constructor));
    }

    pub fn has_type(&self, type_name: &str) -> bool {
        self.constructors.contains_key(type_name)
    }

    /// Build an instance. Unknown types and construction errors are logged and yield `None`.
    pub fn create(&mut self, decl: &Declaration) -> Option<InstanceId> {
        let Some(constructor) = self.constructors.get(&decl.type_name) else {
            tracing::warn!(type_name = %decl.type_name, "unknown illustration type");
            return None;
        };
        match constructor(decl) {
            Ok(instance) => {
                let id = InstanceId(self.next_id);
                self.next_id += 1;
                self.instances.insert(id, instance);
                tracing::debug!(%id, type_name = %decl.type_name, "illustration created");
                Some(id)
            }
            Err(err) => {
                tracing::error!(type_name = %decl.type_name, %err, "failed to create illustration");
                None
            }
        }
    }

    /// Create an instance for every declaration, skipping the ones that fail.
    pub fn create_all<'a>(
        &mut self,
        decls: impl IntoIterator<Item = &'a Declaration>,
    ) -> Vec<InstanceId> {
        decls.into_iter().filter_map(|d| self.create(d)).collect()
    }

    pub fn start(&mut self, id: InstanceId, now: f64) -> IllustraResult<()> {
        let instance = self
            .instances
            .get_mut(&id)
            .ok_or_else(|| IllustraError::config(format!("no instance {id}")))?;
        instance.start(now)
    }

    /// Start every instance; returns how many are running afterwards.
    pub fn start_all(&mut self, now: f64) -> usize {
        for (id, instance) in &mut self.instances {
            if let Err(err) = instance.start(now) {
                tracing::error!(%id, kind = %instance.kind(), %err, "failed to start illustration");
            }
        }
        self.instances.values().filter(|i| i.is_running()).count()
    }

    /// Tick every instance once. An instance whose tick fails is reported and the rest continue.
    pub fn tick_all(&mut self, now: f64) -> Vec<(InstanceId, FrameOutcome)> {
        let mut outcomes = Vec::with_capacity(self.instances.len());
        for (id, instance) in &mut self.instances {
            match instance.tick(now) {
                Ok(outcome) => outcomes.push((*id, outcome)),
                Err(err) => tracing::warn!(%id, %err, "illustration frame failed"),
            }
        }
        outcomes
    }

    pub fn stop(&mut self, id: InstanceId) -> bool {
        match self.instances.get_mut(&id) {
            Some(instance) => {
                instance.stop();
                true
            }
            None => false,
        }
    }

    pub fn stop_all(&mut self) {
        for instance in self.instances.values_mut() {
            instance.stop();
        }
    }

    /// Stop and drop an instance.
    pub fn dispose(&mut self, id: InstanceId) -> Option<Box<dyn Illustration>> {
        let mut instance = self.instances.remove(&id)?;
        instance.stop();
        Some(instance)
    }

    pub fn get(&self, id: InstanceId) -> Option<&dyn Illustration> {
        self.instances.get(&id).map(|i| i.as_ref())
    }

    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut (dyn Illustration + 'static)> {
        self.instances.get_mut(&id).map(|i| i.as_mut())
    }

    pub fn ids(&self) -> impl Iterator<Item = InstanceId> + '_ {
        self.instances.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl std::fmt::Debug for IllustrationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut types: Vec<&String> = self.constructors.keys().collect();
        types.sort();
        f.debug_struct("IllustrationRegistry")
            .field("types", &types)
            .field("instances", &self.instances.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../tests/unit/registry.rs"]
mod tests;

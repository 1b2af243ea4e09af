//! Renderer-side capabilities consumed by dynamic textures.

/// Renderer capability: the size of what is being rendered to and the largest
/// texture the backend accepts.
pub trait Viewport {
    /// Viewport size in physical pixels.
    fn size(&self) -> (u32, u32);

    /// Largest texture width/height the backend can allocate, if known.
    fn max_texture_dimension(&self) -> Option<u32> {
        None
    }
}

/// Viewport description of a configured wgpu surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceViewport {
    pub width: u32,
    pub height: u32,
    pub max_texture_dimension: Option<u32>,
}

impl SurfaceViewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            max_texture_dimension: None,
        }
    }

    pub fn with_max_texture_dimension(mut self, max: u32) -> Self {
        self.max_texture_dimension = Some(max);
        self
    }

    /// Take the size from the surface configuration and the texture limit from
    /// the device limits.
    pub fn from_surface(config: &wgpu::SurfaceConfiguration, limits: &wgpu::Limits) -> Self {
        Self::new(config.width, config.height)
            .with_max_texture_dimension(limits.max_texture_dimension_2d)
    }

    /// Like [`from_surface`](Self::from_surface), querying the limits from the device.
    pub fn from_device(config: &wgpu::SurfaceConfiguration, device: &wgpu::Device) -> Self {
        Self::from_surface(config, &device.limits())
    }
}

impl Viewport for SurfaceViewport {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn max_texture_dimension(&self) -> Option<u32> {
        self.max_texture_dimension
    }
}

// Without device limits at hand there is nothing to clamp against.
impl Viewport for wgpu::SurfaceConfiguration {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

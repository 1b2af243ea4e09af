//! GPU textures for dynamic texture uploads.
//!
//! This module provides [`Texture`], a wrapper around WGPU GPU texture resources,
//! and [`DynamicGpuTexture`], which mirrors a [`DynamicTexture`]'s backing
//! buffer on the GPU and re-uploads it whenever the texture was redrawn.

use image::RgbaImage;

use crate::{
    canvas::Canvas,
    data_structures::{drawable::CreateDrawable, dynamic_texture::DynamicTexture},
};

/// A GPU texture with a view and optional sampler.
#[derive(Clone, Debug)]
pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: Option<wgpu::Sampler>,
}

impl Texture {
    /// Create a texture sized to `img` and upload its pixels.
    ///
    /// # Arguments
    ///
    /// * `img` is the RGBA pixel data, it must not be empty
    /// * `label` is used as a debug label for the GPU resource
    /// * `srgb` toggles between sRGB (true) and linear (false) colour space
    pub fn from_rgba(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        img: &RgbaImage,
        label: Option<&str>,
        srgb: bool,
    ) -> Self {
        let size = wgpu::Extent3d {
            width: img.width(),
            height: img.height(),
            depth_or_array_layers: 1,
        };
        let format = if srgb {
            wgpu::TextureFormat::Rgba8UnormSrgb
        } else {
            wgpu::TextureFormat::Rgba8Unorm
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label,
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = Some(create_default_sampler(device));
        let texture = Self {
            texture,
            view,
            sampler,
        };
        texture.write_rgba(queue, img);
        texture
    }

    /// Overwrite the texture with `img`, which must have the texture's extent.
    pub fn write_rgba(&self, queue: &wgpu::Queue, img: &RgbaImage) {
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                aspect: wgpu::TextureAspect::All,
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
            },
            img.as_raw(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * img.width()),
                rows_per_image: Some(img.height()),
            },
            self.texture.size(),
        );
    }
}

pub fn create_default_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    })
}

/// GPU copy of a dynamic texture's backing buffer.
///
/// Call [`sync`](Self::sync) once per frame after [`DynamicTexture::redraw`];
/// it only touches the GPU when the texture raised its upload flag.
#[derive(Debug, Default)]
pub struct DynamicGpuTexture {
    texture: Option<Texture>,
}

impl DynamicGpuTexture {
    pub fn new() -> Self {
        Self::default()
    }

    /// The uploaded texture, `None` before the first upload or while the
    /// backing buffer is empty.
    pub fn texture(&self) -> Option<&Texture> {
        self.texture.as_ref()
    }

    /// Upload `source` if it was redrawn since the last sync.
    ///
    /// The GPU texture is recreated when the buffer extent changed and written
    /// in place otherwise. Returns whether anything was uploaded.
    pub fn sync<S, C>(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        source: &mut DynamicTexture<S, C>,
    ) -> bool
    where
        C: Canvas + AsRef<RgbaImage>,
        S: CreateDrawable<C>,
    {
        if !source.take_needs_update() {
            return false;
        }
        let img = source.image();
        let options = source.options();
        if img.width() == 0 || img.height() == 0 {
            log::debug!("{} has an empty buffer, dropping GPU texture", options.label);
            self.texture = None;
            return false;
        }

        let reusable = self.texture.as_ref().filter(|texture| {
            texture.texture.width() == img.width() && texture.texture.height() == img.height()
        });
        if let Some(texture) = reusable {
            texture.write_rgba(queue, img);
        } else {
            log::debug!(
                "Allocating {}x{} GPU texture for {}",
                img.width(),
                img.height(),
                options.label
            );
            self.texture = Some(Texture::from_rgba(
                device,
                queue,
                img,
                Some(options.label.as_str()),
                options.srgb,
            ));
        }
        true
    }
}

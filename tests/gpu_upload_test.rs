#[cfg(feature = "integration-tests")]
use crate::common::test_utils::{counting_texture, init_logger};

#[cfg(feature = "integration-tests")]
mod common;

#[cfg(feature = "integration-tests")]
fn headless_device() -> (wgpu::Device, wgpu::Queue) {
    futures::executor::block_on(async {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::new_without_display_handle());
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .unwrap();
        adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("dynamic texture test device"),
                ..Default::default()
            })
            .await
            .unwrap()
    })
}

#[test]
#[cfg(feature = "integration-tests")]
fn should_upload_only_after_redraw() {
    use flow_dyntex::DynamicGpuTexture;

    init_logger();
    let (device, queue) = headless_device();
    let (mut texture, _) = counting_texture(100.0, 50.0);
    let mut gpu = DynamicGpuTexture::new();

    assert!(!gpu.sync(&device, &queue, &mut texture));
    assert!(gpu.texture().is_none());

    texture.redraw().unwrap();
    assert!(gpu.sync(&device, &queue, &mut texture));
    let uploaded = gpu.texture().unwrap();
    assert_eq!((uploaded.texture.width(), uploaded.texture.height()), (128, 64));
    assert_eq!(uploaded.texture.format(), wgpu::TextureFormat::Rgba8UnormSrgb);

    // nothing changed since the last upload
    assert!(!gpu.sync(&device, &queue, &mut texture));
}

#[test]
#[cfg(feature = "integration-tests")]
fn should_reallocate_when_buffer_grows() {
    use flow_dyntex::DynamicGpuTexture;

    init_logger();
    let (device, queue) = headless_device();
    let (mut texture, _) = counting_texture(16.0, 16.0);
    let mut gpu = DynamicGpuTexture::new();
    texture.redraw().unwrap();
    gpu.sync(&device, &queue, &mut texture);

    texture.set_pixel_ratio(4.0);
    texture.redraw().unwrap();
    assert!(gpu.sync(&device, &queue, &mut texture));

    let uploaded = gpu.texture().unwrap();
    assert_eq!((uploaded.texture.width(), uploaded.texture.height()), (64, 64));
}

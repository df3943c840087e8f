use std::sync::Arc;

use forge_core::{Animator, FieldParams, HostEvent, ParticleField, PointRenderer, Viewport};
use instant::Instant;
use winit::{
    dpi::PhysicalSize,
    event::*,
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

mod host;
use host::NativeHost;

fn viewport_of(window: &Window, size: PhysicalSize<u32>) -> Viewport {
    let scale = window.scale_factor();
    let logical = size.to_logical::<f32>(scale);
    Viewport::new(logical.width, logical.height, scale as f32)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Physics Forge particle field (native)")
            .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 720.0))
            .build(&event_loop)?,
    );

    let field = ParticleField::generate(&FieldParams::default(), &mut rand::thread_rng());
    let viewport = viewport_of(&window, window.inner_size());
    let (width, height) = viewport.physical_size();

    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(Arc::clone(&window))?;
    let mut renderer: PointRenderer<'static> = pollster::block_on(PointRenderer::new(
        &instance,
        surface,
        width,
        height,
        field.colors(),
    ))?;

    let host = NativeHost::new(Arc::clone(&window));
    let mut animator = Some(Animator::mount(host, field, viewport, None)?);
    let start = Instant::now();
    let mut cursor = (0.0_f32, 0.0_f32);

    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop.run(move |event, elwt| {
        let Event::WindowEvent { event, .. } = event else {
            return;
        };
        if let WindowEvent::CloseRequested = event {
            if let Some(a) = animator.take() {
                a.unmount();
            }
            elwt.exit();
            return;
        }
        let Some(anim) = animator.as_mut() else {
            return;
        };
        let host_event = match event {
            WindowEvent::Resized(size) => Some(HostEvent::Resize(viewport_of(&window, size))),
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f32>(window.scale_factor());
                cursor = (logical.x, logical.y);
                Some(HostEvent::PointerMove {
                    x: cursor.0,
                    y: cursor.1,
                })
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => Some(match state {
                ElementState::Pressed => HostEvent::PointerDown {
                    x: cursor.0,
                    y: cursor.1,
                },
                ElementState::Released => HostEvent::PointerUp,
            }),
            WindowEvent::RedrawRequested => {
                if !anim.is_frame_pending() {
                    return;
                }
                let now_ms = start.elapsed().as_secs_f64() * 1000.0;
                let view = anim.frame(now_ms);
                match renderer.render(&view) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        renderer.reconfigure()
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("render error: out of memory");
                        elwt.exit();
                    }
                    Err(e) => log::warn!("render error: {:?}", e),
                }
                None
            }
            _ => None,
        };
        if let Some(ev) = host_event {
            if anim.host().listens(ev.kind()) {
                anim.handle(ev);
            }
        }
    })?;
    Ok(())
}

/*!
video::display - Windowed presentation of the video page (feature `display`).

Opens a winit window with a pixels surface and presents the rendered
frame until the user closes the window or presses Escape. The frame is a
snapshot of the memory handed in; the CPU is not stepped while the
window is open.
*/
#![cfg(feature = "display")]

use pixels::{Pixels, SurfaceTexture};
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::memory::Memory;
use crate::video::{FRAME_HEIGHT, FRAME_RGB_LEN, FRAME_WIDTH, render_frame};

/// Window scale factor (the native frame is 32x32).
const SCALE: u32 = 8;

/// Errors raised while opening or driving the display window.
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("surface error: {0}")]
    Surface(#[from] pixels::Error),
}

struct App {
    frame: Vec<u8>, // RGB snapshot, FRAME_RGB_LEN bytes
    window: Option<&'static Window>,
    pixels: Option<Pixels<'static>>,
    failure: Option<DisplayError>,
}

impl App {
    fn new(frame: Vec<u8>) -> Self {
        Self {
            frame,
            window: None,
            pixels: None,
            failure: None,
        }
    }

    fn upload_frame(&mut self) {
        let Some(pixels) = self.pixels.as_mut() else {
            return;
        };
        let target = pixels.frame_mut();
        for (i, rgb) in self.frame.chunks_exact(3).enumerate() {
            let offset = i * 4;
            target[offset..offset + 3].copy_from_slice(rgb);
            target[offset + 3] = 0xFF;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let size = winit::dpi::LogicalSize::new(FRAME_WIDTH * SCALE, FRAME_HEIGHT * SCALE);
        let attrs = WindowAttributes::default()
            .with_title("mos-core")
            .with_inner_size(size)
            .with_resizable(false);

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let window: &'static Window = Box::leak(Box::new(window));
                let inner = window.inner_size();
                let surface = SurfaceTexture::new(inner.width, inner.height, window);
                match Pixels::new(FRAME_WIDTH, FRAME_HEIGHT, surface) {
                    Ok(pixels) => {
                        self.pixels = Some(pixels);
                        self.window = Some(window);
                        self.upload_frame();
                    }
                    Err(e) => {
                        self.failure = Some(e.into());
                        event_loop.exit();
                    }
                }
            }
            Err(e) => {
                self.failure = Some(winit::error::EventLoopError::Os(e).into());
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(KeyCode::Escape) = event.physical_key {
                    if event.state == ElementState::Pressed {
                        event_loop.exit();
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(pixels) = self.pixels.as_ref() {
                    if let Err(e) = pixels.render() {
                        self.failure = Some(e.into());
                        event_loop.exit();
                    }
                }
            }
            _ => {}
        }
    }
}

/// Open a window showing the current contents of the video page and block
/// until it is closed.
pub fn show(memory: &Memory) -> Result<(), DisplayError> {
    let mut frame = vec![0u8; FRAME_RGB_LEN];
    render_frame(memory, &mut frame);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(frame);
    event_loop.run_app(&mut app)?;

    match app.failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2
//! and OpenGL context necessary for creating a windowed application.

use std::sync::Arc;

use glow::HasContext;
use sdl2::event::{Event, WindowEvent};

use crate::error::{Error, Result};
use crate::input::{FrameInput, Key, KeyboardState};
use crate::scenes::Platform;

const GL_MAJOR: u8 = 3;
const GL_MINOR: u8 = 3;

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
///
/// Dropping it destroys the context and the window, so GPU objects holding
/// the `gl` handle must be dropped first.
pub struct App {
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
    pub keyboard: KeyboardState,
    pub gl_context: sdl2::video::GLContext,
    pub window: sdl2::video::Window,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub sdl: sdl2::Sdl,
}

impl App {
    /// Creates a new [`App`] with an OpenGL 3.3 core context and a resizable
    /// window of the given title and size.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self> {
        let sdl = sdl2::init().map_err(Error::Sdl)?;
        let video_subsystem = sdl.video().map_err(Error::Sdl)?;
        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(GL_MAJOR, GL_MINOR);
        #[cfg(target_os = "macos")]
        gl_attr.set_context_flags().forward_compatible().set();

        let window = video_subsystem
            .window(title, width, height)
            .opengl()
            .resizable()
            .build()
            .map_err(|e| Error::Window(e.to_string()))?;
        let gl_context = window.gl_create_context().map_err(Error::Context)?;
        window.gl_make_current(&gl_context).map_err(Error::Context)?;
        if let Err(e) = video_subsystem.gl_set_swap_interval(1) {
            log::warn!("vsync unavailable: {e}");
        }

        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        check_version(gl.version().major, gl.version().minor)?;
        log::info!(
            "OpenGL {}.{} ({})",
            gl.version().major,
            gl.version().minor,
            gl.version().vendor_info
        );

        let (drawable_width, drawable_height) = viewport_size(window.drawable_size());
        unsafe {
            gl.viewport(0, 0, drawable_width, drawable_height);
        }

        let event_pump = sdl.event_pump().map_err(Error::Sdl)?;

        Ok(Self {
            gl: Arc::new(gl),
            event_pump,
            keyboard: KeyboardState::default(),
            gl_context,
            window,
            video_subsystem,
            sdl,
        })
    }
}

/// Rejects contexts older than the one requested from SDL.
fn check_version(major: u32, minor: u32) -> Result<()> {
    if (major, minor) < (GL_MAJOR as u32, GL_MINOR as u32) {
        return Err(Error::GlVersion {
            major,
            minor,
            required_major: GL_MAJOR as u32,
            required_minor: GL_MINOR as u32,
        });
    }
    Ok(())
}

/// Drawable size in pixels as viewport arguments.
fn viewport_size((width, height): (u32, u32)) -> (i32, i32) {
    (
        i32::try_from(width).unwrap_or(i32::MAX),
        i32::try_from(height).unwrap_or(i32::MAX),
    )
}

impl Platform for App {
    fn poll_input(&mut self) -> FrameInput {
        let mut input = FrameInput::default();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => input.close_requested = true,
                // Window events carry the logical size; the viewport wants
                // pixels, which differ on high-DPI displays.
                Event::Window {
                    win_event: WindowEvent::SizeChanged(..),
                    ..
                } => input.resized = Some(viewport_size(self.window.drawable_size())),
                Event::KeyDown {
                    keycode: Some(keycode),
                    ..
                } => {
                    if let Some(key) = Key::from_keycode(keycode) {
                        self.keyboard.press(key);
                    }
                }
                Event::KeyUp {
                    keycode: Some(keycode),
                    ..
                } => {
                    if let Some(key) = Key::from_keycode(keycode) {
                        self.keyboard.release(key);
                    }
                }
                _ => {}
            }
        }

        input.keys_down = self.keyboard.down.clone();
        input
    }

    fn present(&mut self) {
        self.window.gl_swap_window();
    }
}

use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{ContextApi, ContextAttributesBuilder, PossiblyCurrentContext, Version};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, WindowSurface};

use glutin_winit::DisplayBuilder;

use raw_window_handle::HasRawWindowHandle;

use std::ffi::CString;
use std::num::NonZeroU32;

use thiserror::Error;

use winit::dpi::{PhysicalSize, Size};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use rectangles::{DrawDriver, DriverError, Frame, Resolution};

use crate::backend::{BackendError, GlBackend};

pub struct App {
    event_loop: EventLoop<()>,
    gl_context: PossiblyCurrentContext,
    gl_window: GlWindow,
    driver: DrawDriver<GlBackend>,
    frame: Frame,
}

impl App {
    pub fn new(width: u32, height: u32, frame: Frame) -> Result<Self, AppError> {
        let event_loop = EventLoop::new();
        let window_builder = WindowBuilder::new()
            .with_inner_size(Size::Physical(PhysicalSize::new(width, height)))
            .with_min_inner_size(Size::Physical(PhysicalSize::new(32, 32)))
            .with_title("Rectangles");
        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));
        let template = ConfigTemplateBuilder::new();

        let (window, gl_config) = display_builder
            .build(&event_loop, template, |configs| {
                configs
                    .reduce(|best, c| {
                        if c.num_samples() > best.num_samples() {
                            c
                        } else {
                            best
                        }
                    })
                    .expect("display builder only calls back with matching configs")
            })
            .map_err(|e| AppError::Display(e.to_string()))?;

        let window = window.ok_or(AppError::NoWindow)?;
        let handle = Some(window.raw_window_handle());
        let gl_display = gl_config.display();

        let gles_attr = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::Gles(Some(Version::new(3, 0))))
            .build(handle);
        // desktop GL 4.3 accepts `#version 300 es` shaders
        let gl_attr = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(4, 3))))
            .build(handle);

        let not_current = unsafe {
            match gl_display.create_context(&gl_config, &gles_attr) {
                Ok(c) => c,
                Err(gles) => {
                    log::debug!("GLES 3.0 context unavailable, trying OpenGL 4.3: {gles}");

                    gl_display
                        .create_context(&gl_config, &gl_attr)
                        .map_err(|gl| AppError::NoGraphicsSupport { gles, gl })?
                }
            }
        };

        let gl_window = GlWindow::new(window, &gl_config)?;

        let gl_context = not_current.make_current(&gl_window.surface)?;

        gl::load_with(|s| match CString::new(s) {
            Ok(name) => gl_display.get_proc_address(name.as_c_str()).cast(),
            Err(_) => std::ptr::null(),
        });

        let mut driver = DrawDriver::new(GlBackend::new()?);
        driver.configure()?;

        log::info!("prepared {} rectangles", frame.len());

        Ok(Self {
            event_loop,
            gl_context,
            gl_window,
            driver,
            frame,
        })
    }

    pub fn run(mut self) -> ! {
        self.event_loop
            .run(move |event, _window_target, control_flow| {
                *control_flow = ControlFlow::Wait;
                match event {
                    Event::WindowEvent { event, .. } => match event {
                        WindowEvent::Resized(size) => {
                            if let (Some(w), Some(h)) =
                                (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
                            {
                                self.gl_window.surface.resize(&self.gl_context, w, h);
                                self.gl_window.window.request_redraw();
                            }
                        }
                        WindowEvent::CloseRequested => control_flow.set_exit(),
                        _ => (),
                    },
                    Event::RedrawRequested(_) => {
                        let (width, height): (u32, u32) =
                            self.gl_window.window.inner_size().into();

                        let res = self
                            .driver
                            .render(&self.frame, Resolution::new(width, height));

                        if let Err(e) = res {
                            log::error!("Could not draw frame: {e}");
                            control_flow.set_exit_with_code(1);
                            return;
                        }

                        if let Err(e) = self.gl_window.surface.swap_buffers(&self.gl_context) {
                            log::error!("Could not present frame: {e}");
                            control_flow.set_exit_with_code(1);
                        }
                    }
                    _ => (),
                }
            })
    }
}

pub struct GlWindow {
    // XXX the surface must be dropped before the window.
    pub surface: Surface<WindowSurface>,
    pub window: Window,
}

impl GlWindow {
    pub fn new(window: Window, config: &Config) -> Result<Self, AppError> {
        let (width, height): (u32, u32) = window.inner_size().into();
        let raw_window_handle = window.raw_window_handle();
        let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            NonZeroU32::new(width).ok_or(AppError::ZeroSize)?,
            NonZeroU32::new(height).ok_or(AppError::ZeroSize)?,
        );

        let surface = unsafe { config.display().create_window_surface(config, &attrs)? };

        Ok(Self { window, surface })
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not open display: {0}")]
    Display(String),
    #[error("Display did not create a window")]
    NoWindow,
    #[error("Window has zero size")]
    ZeroSize,
    #[error("No graphics support (GLES 3.0: {gles}; OpenGL 4.3: {gl})")]
    NoGraphicsSupport {
        gles: glutin::error::Error,
        gl: glutin::error::Error,
    },
    #[error("{0}")]
    Gl(#[from] glutin::error::Error),
    #[error("{0}")]
    Backend(#[from] BackendError),
    #[error("{0}")]
    Driver(#[from] DriverError<BackendError>),
}

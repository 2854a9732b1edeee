mod chrome;

use std::path::Path;

use egui_sdl2_gl::egui::{self, Color32, CtxRef, TextureId, Vec2};
use egui_sdl2_gl::painter::Painter;
use egui_sdl2_gl::{DpiScaling, EguiStateHandler, ShaderVersion};
use eyre::Result;
use log::warn;
use sdl2::event::Event;
use sdl2::mouse::MouseButton;
use sdl2::pixels::PixelFormatEnum;
use sdl2::surface::Surface;
use sdl2::video::{GLContext, Window, WindowPos};
use sdl2::{EventPump, Sdl};

use crate::frames;
use crate::fw_error;

pub const DISPLAY_SIZE: u32 = 300;
const WINDOW_X: i32 = 100;
const WINDOW_Y: i32 = 100;

/// What the window is currently showing. Overwritten on every update tick.
pub enum Display {
    Frame,
    Missing(String),
}

pub struct Ui {
    _gl_context: GLContext,
    event_pump: EventPump,
    window: Window,
    egui_context: CtxRef,
    egui_painter: Painter,
    egui_state: EguiStateHandler,
    frame_texture: TextureId,
    drag_start: Option<(i32, i32)>,
}

impl Ui {
    pub fn new(sdl: &Sdl) -> Result<Self> {
        let video = fw_error!(sdl.video());

        let gl_attr = video.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_double_buffer(true);
        gl_attr.set_context_version(3, 2);

        let mut builder = video.window("Minecraft Clock", DISPLAY_SIZE, DISPLAY_SIZE);
        builder.position(WINDOW_X, WINDOW_Y).opengl().borderless();
        // SDL_WINDOW_ALWAYS_ON_TOP, which WindowBuilder has no method for
        let flags = builder.window_flags() | 0x8000;
        builder.set_window_flags(flags);
        let mut window = builder.build()?;

        let gl_context = fw_error!(window.gl_create_context());

        let (mut egui_painter, egui_state) =
            egui_sdl2_gl::with_sdl2(&window, ShaderVersion::Default, DpiScaling::Custom(1.0));
        let egui_context = CtxRef::default();
        let blank = vec![Color32::TRANSPARENT; (DISPLAY_SIZE * DISPLAY_SIZE) as usize];
        let frame_texture = egui_painter.new_user_texture(
            (DISPLAY_SIZE as usize, DISPLAY_SIZE as usize),
            &blank,
            false,
        );

        let icon_path = frames::resource_path(frames::ICON_FILENAME);
        Self::set_window_icon(&mut window, &icon_path);

        let chrome = chrome::native();
        chrome.apply(&window);
        chrome.set_taskbar_icon(&window, &icon_path);

        let event_pump = fw_error!(sdl.event_pump());

        Ok(Self {
            _gl_context: gl_context,
            event_pump,
            window,
            egui_context,
            egui_painter,
            egui_state,
            frame_texture,
            drag_start: None,
        })
    }

    fn set_window_icon(window: &mut Window, path: &Path) {
        let (mut pixels, width, height) = match frames::load_icon(path) {
            Ok(icon) => icon,
            Err(err) => {
                warn!("window icon skipped: {err}");
                return;
            }
        };
        match Surface::from_data(&mut pixels, width, height, width * 4, PixelFormatEnum::RGBA32) {
            Ok(surface) => window.set_icon(surface),
            Err(err) => warn!("window icon skipped: {err}"),
        };
    }

    /// Swaps the pixels behind the frame texture. `pixels` must be
    /// `DISPLAY_SIZE` x `DISPLAY_SIZE` RGBA8.
    pub fn set_frame(&mut self, pixels: Vec<u8>) {
        self.egui_painter
            .update_user_texture_rgba8_data(self.frame_texture, pixels);
    }

    pub fn render(&mut self, display: &Display) {
        self.egui_context.begin_frame(self.egui_state.input.take());

        unsafe {
            gl::ClearColor(1.0, 1.0, 1.0, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }

        let frame_texture = self.frame_texture;
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(&self.egui_context, |ui| {
                ui.centered_and_justified(|ui| match display {
                    Display::Frame => {
                        ui.image(frame_texture, Vec2::splat(DISPLAY_SIZE as f32));
                    }
                    Display::Missing(label) => {
                        ui.colored_label(Color32::BLACK, label);
                    }
                });
            });

        let (egui_output, paint_cmds) = self.egui_context.end_frame();
        self.egui_state.process_output(&self.window, &egui_output);

        let paint_jobs = self.egui_context.tessellate(paint_cmds);
        self.egui_painter
            .paint_jobs(None, paint_jobs, &self.egui_context.font_image());

        self.window.gl_swap_window();
    }

    pub fn handle_input(&mut self) {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::MouseButtonDown {
                    mouse_btn: MouseButton::Right,
                    ..
                } => std::process::exit(0),
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => {
                    self.drag_start = Some((x, y));
                }
                Event::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    ..
                } => {
                    self.drag_start = None;
                }
                Event::MouseMotion { x, y, .. } => {
                    if let Some(pressed) = self.drag_start {
                        let (nx, ny) = drag_target(self.window.position(), pressed, (x, y));
                        self.window
                            .set_position(WindowPos::Positioned(nx), WindowPos::Positioned(ny));
                    }
                }
                _ => {
                    self.egui_state
                        .process_input(&self.window, event, &mut self.egui_painter);
                }
            }
        }
    }
}

/// New top-left for a drag: keeps the point grabbed on press under the
/// cursor. `motion` is window-local, so `window + motion` is the pointer's
/// screen position.
fn drag_target(window: (i32, i32), pressed: (i32, i32), motion: (i32, i32)) -> (i32, i32) {
    (window.0 + motion.0 - pressed.0, window.1 + motion.1 - pressed.1)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn drag_lands_grab_point_under_cursor() {
        let (wx, wy) = (100, 100);
        let (px, py) = (30, 40);
        // Pointer moved to screen (500, 260).
        let (sx, sy) = (500, 260);
        assert_eq!(
            drag_target((wx, wy), (px, py), (sx - wx, sy - wy)),
            (sx - px, sy - py)
        );
    }

    #[test]
    fn drag_without_motion_keeps_position() {
        assert_eq!(drag_target((100, 100), (30, 40), (30, 40)), (100, 100));
    }
}

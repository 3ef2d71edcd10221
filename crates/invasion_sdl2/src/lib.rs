use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton as SdlMouseButton;
use sdl2::pixels::PixelFormatEnum;
use typed_builder::TypedBuilder;

pub use invasion_common;
pub use invasion_common::app::App;
pub use sdl2;

use invasion_common::key::{Key, MouseButton};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    RGB24,
}

#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub title: String,
    #[builder(default = PixelFormat::RGB24)]
    pub pixel_format: PixelFormat,
    #[builder(default = Duration::from_micros(16_667))]
    pub target_frame: Duration,
}

pub struct SdlContext;

impl SdlContext {
    pub fn run(sdl_init_info: SdlInitInfo, mut app: impl App) -> Result<()> {
        let SdlInitInfo {
            width,
            height,
            scale,
            title,
            pixel_format,
            target_frame,
        } = sdl_init_info;
        let scale = scale.max(1);

        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let window = video_subsystem
            .window(&title, width * scale, height * scale)
            .position_centered()
            .build()?;
        log::info!("Opened '{title}' at {}x{}", width * scale, height * scale);

        let mut canvas = window.into_canvas().build()?;
        canvas
            .set_scale(scale as f32, scale as f32)
            .map_err(|e| anyhow!(e))?;

        let texture_creator = canvas.texture_creator();
        let mut texture = texture_creator.create_texture_streaming(
            map_pixel_format(pixel_format),
            width,
            height,
        )?;

        let color_size = map_pixel_format_size(pixel_format);
        let mut screen_state = vec![0u8; (width * color_size * height) as usize];
        let mouse = sdl_context.mouse();
        let mut cursor_visible = app.cursor_visible();
        mouse.show_cursor(cursor_visible);

        app.init();
        let mut event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;
        let mut last_frame = Instant::now();

        loop {
            if app.should_exit() {
                app.exit();
                break;
            }

            for event in event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => {
                        app.exit();
                        return Ok(());
                    }
                    Event::KeyDown {
                        keycode: Some(keycode),
                        repeat: false,
                        ..
                    } => {
                        app.handle_key_event(map_keycode(keycode), true);
                    }
                    Event::KeyUp {
                        keycode: Some(keycode),
                        ..
                    } => {
                        app.handle_key_event(map_keycode(keycode), false);
                    }
                    Event::MouseMotion { x, y, .. } => {
                        let (x, y) = to_logical(x, y, scale);
                        app.handle_mouse_motion(x, y);
                    }
                    Event::MouseButtonDown {
                        mouse_btn, x, y, ..
                    } => {
                        let (x, y) = to_logical(x, y, scale);
                        app.handle_mouse_button(map_mouse_button(mouse_btn), x, y, true);
                    }
                    Event::MouseButtonUp {
                        mouse_btn, x, y, ..
                    } => {
                        let (x, y) = to_logical(x, y, scale);
                        app.handle_mouse_button(map_mouse_button(mouse_btn), x, y, false);
                    }
                    Event::Window {
                        win_event: WindowEvent::Leave,
                        ..
                    } => app.handle_mouse_leave(),
                    _ => {}
                }
            }

            app.update(&mut screen_state);

            if app.cursor_visible() != cursor_visible {
                cursor_visible = app.cursor_visible();
                mouse.show_cursor(cursor_visible);
            }

            texture.update(None, &screen_state, (width * color_size) as usize)?;
            canvas.clear();
            canvas.copy(&texture, None, None).map_err(|e| anyhow!(e))?;
            canvas.present();

            let elapsed = last_frame.elapsed();
            if elapsed < target_frame {
                std::thread::sleep(target_frame - elapsed);
            }
            last_frame = Instant::now();
        }

        Ok(())
    }
}

fn to_logical(x: i32, y: i32, scale: u32) -> (i32, i32) {
    (x / scale as i32, y / scale as i32)
}

pub fn map_pixel_format(pixel_format: PixelFormat) -> PixelFormatEnum {
    match pixel_format {
        PixelFormat::RGB24 => PixelFormatEnum::RGB24,
    }
}

pub fn map_pixel_format_size(pixel_format: PixelFormat) -> u32 {
    match pixel_format {
        PixelFormat::RGB24 => 3,
    }
}

pub fn map_keycode(keycode: Keycode) -> Key {
    match keycode {
        Keycode::Q => Key::Q,
        Keycode::Escape => Key::Escape,
        Keycode::Space => Key::Space,
        _ => Key::None,
    }
}

pub fn map_mouse_button(button: SdlMouseButton) -> MouseButton {
    match button {
        SdlMouseButton::Left => MouseButton::Left,
        SdlMouseButton::Right => MouseButton::Right,
        SdlMouseButton::Middle => MouseButton::Middle,
        _ => MouseButton::Other,
    }
}

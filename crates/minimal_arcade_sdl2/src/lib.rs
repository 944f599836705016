use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::{Point, Rect};
use sdl2::render::{BlendMode, Texture, TextureCreator, WindowCanvas};
use sdl2::video::WindowContext;
use typed_builder::TypedBuilder;

pub use minimal_arcade_common;
pub use minimal_arcade_common::app::App;
pub use sdl2;

use minimal_arcade_common::{DrawCommand, Frame, ImageData, Key};

/// Default pause after each presented frame, on top of vsync.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(60);

#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    pub width: u32,
    pub height: u32,
    #[builder(default = 1)]
    pub scale: u32,
    pub title: String,
    #[builder(default = DEFAULT_FRAME_DELAY)]
    pub frame_delay: Duration,
}

pub struct SdlContext;

impl SdlContext {
    pub fn run(sdl_init_info: SdlInitInfo, mut app: impl App) -> Result<()> {
        let SdlInitInfo {
            width,
            height,
            scale,
            title,
            frame_delay,
        } = sdl_init_info;

        let sdl_context = sdl2::init().map_err(|e| anyhow!(e)).context("SDL init failed")?;
        let video_subsystem = sdl_context
            .video()
            .map_err(|e| anyhow!(e))
            .context("SDL video init failed")?;
        let window = video_subsystem
            .window(&title, width * scale, height * scale)
            .position_centered()
            .build()?;
        let mut canvas = window.into_canvas().present_vsync().build()?;
        canvas
            .set_scale(scale as f32, scale as f32)
            .map_err(|e| anyhow!(e))?;
        let creator = canvas.texture_creator();

        app.init();
        let textures = upload_images(&creator, app.images())?;
        log::info!("Uploaded {} sprite textures", textures.len());

        let mut event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;
        let mut frame = Frame::new();
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
                        let key = map_keycode(keycode);
                        app.handle_key_event(key, true);
                    }
                    Event::KeyUp {
                        keycode: Some(keycode),
                        ..
                    } => {
                        let key = map_keycode(keycode);
                        app.handle_key_event(key, false);
                    }
                    _ => {}
                }
            }

            app.update();

            frame.clear();
            app.draw(&mut frame);
            present(&mut canvas, &textures, &frame, height)?;

            std::thread::sleep(frame_delay);
        }

        Ok(())
    }
}

fn upload_images<'a>(
    creator: &'a TextureCreator<WindowContext>,
    images: &[ImageData],
) -> Result<Vec<Texture<'a>>> {
    images
        .iter()
        .map(|image| {
            let mut texture = creator
                .create_texture_static(PixelFormatEnum::RGBA32, image.width, image.height)
                .with_context(|| format!("failed to create texture for '{}'", image.name))?;
            texture
                .update(None, &image.pixels, image.pitch())
                .with_context(|| format!("failed to upload texture '{}'", image.name))?;
            texture.set_blend_mode(BlendMode::Blend);
            Ok(texture)
        })
        .collect()
}

fn present(canvas: &mut WindowCanvas, textures: &[Texture], frame: &Frame, height: u32) -> Result<()> {
    let (r, g, b, a) = frame.clear_color.rgba();
    canvas.set_draw_color(sdl2::pixels::Color::RGBA(r, g, b, a));
    canvas.clear();

    for command in frame.commands() {
        match *command {
            DrawCommand::Sprite {
                image,
                center_x,
                center_y,
                width: w,
                height: h,
            } => {
                let Some(texture) = textures.get(image.0) else {
                    log::warn!("Draw command references unknown image {:?}", image);
                    continue;
                };
                let dest = Rect::from_center(to_screen(center_x, center_y, height), w, h);
                canvas.copy(texture, None, Some(dest)).map_err(|e| anyhow!(e))?;
            }
        }
    }

    canvas.present();
    Ok(())
}

/// Games place sprites with y growing upwards; SDL's origin is top-left.
pub fn to_screen(x: f32, y: f32, height: u32) -> Point {
    Point::new(x.round() as i32, height as i32 - y.round() as i32)
}

pub fn map_keycode(keycode: Keycode) -> Key {
    match keycode {
        Keycode::Up => Key::Up,
        Keycode::Down => Key::Down,
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        Keycode::W => Key::W,
        Keycode::A => Key::A,
        Keycode::S => Key::S,
        Keycode::D => Key::D,
        Keycode::Space => Key::Space,
        Keycode::Escape => Key::Escape,
        _ => Key::None,
    }
}

use std::collections::HashMap;

use minimal_arcade_common::app::App;
use minimal_arcade_common::{Frame, ImageData, ImageId, Key};

use crate::assets::Assets;
use crate::config::ShooterConfig;
use crate::direction::Direction;
use crate::sound::{SoundManager, SoundType};
use crate::sprite::{Background, Bullet, Player, Scroll, Viewport};
use crate::{SCREEN_SCALE, TITLE};


const PLAYER_IMAGE: ImageId = ImageId(0);
const BACKGROUND_IMAGE: ImageId = ImageId(1);
const BULLET_IMAGE: ImageId = ImageId(2);

/// The shooter's application context: owns every entity, the held direction
/// and the audio handle.
///
/// Implements the shared `App` trait so the SDL2 frontend
/// (`minimal_arcade_sdl2`) can drive it.
pub struct ShooterApp {
    config: ShooterConfig,
    viewport: Viewport,
    images: Vec<ImageData>,
    player: Player,
    background: Background,
    bullets: Vec<Bullet>,
    direction: Direction,
    should_exit: bool,
    sound_files: HashMap<SoundType, Vec<u8>>,
    sound: Option<SoundManager>,
}

impl ShooterApp {
    pub fn new(config: ShooterConfig, assets: Assets) -> Self {
        let viewport = Viewport::new(config.screen_width as f32, config.screen_height as f32);
        let Assets {
            player,
            background,
            bullet,
            sounds,
        } = assets;
        let player_sprite = Player::new(PLAYER_IMAGE, &player, config.player_speed, viewport);
        let background_sprite = Background::new(BACKGROUND_IMAGE, &background, viewport);
        // Order must match the ImageId constants above.
        let images = vec![player, background, bullet];

        Self {
            config,
            viewport,
            images,
            player: player_sprite,
            background: background_sprite,
            bullets: Vec::new(),
            direction: Direction::None,
            should_exit: false,
            sound_files: sounds,
            sound: None,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    /// Spawn a bullet at the ship's current position and play the shot.
    pub fn fire(&mut self) {
        let (x, y) = self.player.position();
        self.bullets
            .push(Bullet::fire(BULLET_IMAGE, x, y, self.config.bullet_speed));
        log::debug!("Fired bullet at ({x}, {y}), {} in flight", self.bullets.len());

        if let Some(sound) = &self.sound {
            sound.play(SoundType::Shot);
        }
    }

    /// Advance the world by one frame: ship, background, then bullets.
    pub fn step(&mut self) -> Scroll {
        self.player.move_in(self.direction, self.viewport);
        let scroll = self.background.scroll();

        for bullet in &mut self.bullets {
            bullet.advance();
        }
        let before = self.bullets.len();
        let viewport = self.viewport;
        self.bullets.retain(|bullet| !bullet.is_off_screen(viewport));
        let despawned = before - self.bullets.len();
        if despawned > 0 {
            log::trace!("Despawned {despawned} bullets past the right edge");
        }

        scroll
    }
}

impl App for ShooterApp {
    fn init(&mut self) {
        log::info!("Minimal Arcade init");
        // If audio cannot be brought up the game still runs, just silently.
        if self.sound.is_none() {
            self.sound = SoundManager::new(std::mem::take(&mut self.sound_files));
        }
    }

    fn update(&mut self) {
        let scroll = self.step();
        if scroll != Scroll::Step {
            log::trace!(
                "Background wrapped ({scroll:?}) to x = {}",
                self.background.position().0
            );
        }
    }

    fn draw(&self, frame: &mut Frame) {
        self.background.draw(frame);
        self.player.draw(frame);
        for bullet in &self.bullets {
            bullet.draw(frame);
        }
    }

    fn handle_key_event(&mut self, key: Key, is_down: bool) {
        if is_down {
            match key {
                Key::Space => self.fire(),
                Key::Escape => self.should_exit = true,
                _ => {
                    if let Some(direction) = Direction::from_key(key) {
                        self.direction = direction;
                    }
                }
            }
        } else if Direction::from_key(key) == Some(self.direction) {
            // Only releasing the held direction stops the ship.
            self.direction = Direction::None;
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        log::info!("Minimal Arcade exit, {} bullets in flight", self.bullets.len());
    }

    fn images(&self) -> &[ImageData] {
        &self.images
    }

    fn width(&self) -> u32 {
        self.config.screen_width
    }

    fn height(&self) -> u32 {
        self.config.screen_height
    }

    fn scale(&self) -> u32 {
        SCREEN_SCALE
    }

    fn title(&self) -> String {
        TITLE.to_string()
    }
}

use typed_builder::TypedBuilder;

/// Tunables for the shooter. Defaults reproduce the classic 500x500 layout.
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
pub struct ShooterConfig {
    #[builder(default = 500)]
    pub screen_width: u32,
    #[builder(default = 500)]
    pub screen_height: u32,
    #[builder(default = 10.0)]
    pub player_speed: f32,
    #[builder(default = 17.0)]
    pub bullet_speed: f32,
    #[builder(default = "PlayerShip.png".to_string())]
    pub player_image: String,
    #[builder(default = "background1.png".to_string())]
    pub background_image: String,
    #[builder(default = "bullet_shot.png".to_string())]
    pub bullet_image: String,
    #[builder(default = "laser8.wav".to_string())]
    pub shot_sound: String,
}

impl Default for ShooterConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ShooterConfig::default();
        assert_eq!((config.screen_width, config.screen_height), (500, 500));
        assert_eq!(config.player_speed, 10.0);
        assert_eq!(config.bullet_speed, 17.0);
        assert_eq!(config.shot_sound, "laser8.wav");
    }

    #[test]
    fn builder_overrides() {
        let config = ShooterConfig::builder().screen_width(800).bullet_speed(5.0).build();
        assert_eq!(config.screen_width, 800);
        assert_eq!(config.screen_height, 500);
        assert_eq!(config.bullet_speed, 5.0);
    }
}

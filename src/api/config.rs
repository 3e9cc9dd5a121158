/// Tuning for the whole game, provided by the host at startup.
/// The world uses a centered origin: x spans ±world_width/2 and y
/// spans ±world_height/2, scrolling to the left.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// World width in game units.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Player movement speed in units per second.
    pub player_speed: f32,
    /// Spawn-map scroll speed in units per second.
    pub scroll_speed: f32,

    /// Enemy pool capacity.
    pub enemy_capacity: usize,
    /// Player-bullet pool capacity.
    pub bullet_capacity: usize,
    /// Effect pool capacity.
    pub effect_capacity: usize,
    /// Item pool capacity.
    pub item_capacity: usize,

    /// Seconds between held-trigger normal shots.
    pub shot_cooldown: f32,
    /// Normal bullet speed in units per second.
    pub bullet_speed: f32,
    /// Laser segment speed in units per second.
    pub laser_speed: f32,
    /// Number of segments in a full beam.
    pub laser_length: u32,
    /// Gap the trailing segment must open before the next one spawns.
    pub laser_spacing: f32,
    /// Distance the trailing segment must travel past the anchor before
    /// the beam can be re-triggered.
    pub laser_reset_distance: f32,
    /// Highest reachable weapon level.
    pub weapon_level_max: u8,

    /// Seconds between player death and the game-over transition.
    pub death_delay: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 800.0,
            world_height: 600.0,
            player_speed: 400.0,
            scroll_speed: 100.0,
            enemy_capacity: 128,
            bullet_capacity: 128,
            effect_capacity: 128,
            item_capacity: 32,
            shot_cooldown: 1.0 / 8.0,
            bullet_speed: 1200.0,
            laser_speed: 1600.0,
            laser_length: 10,
            laser_spacing: 32.0,
            laser_reset_distance: 512.0,
            weapon_level_max: 2,
            death_delay: 2.0,
        }
    }
}

//! Side-scroller simulation.
//!
//! `GameEngine` owns the player, the obstacle stream, score and level state and
//! advances all of it one animation frame at a time through [`GameEngine::tick`].
//! It knows nothing about the browser: drawing and HUD updates go through a
//! [`Surface`], randomness through a [`RandomSource`]. That keeps the whole
//! game runnable under native `cargo test`.

use crate::config::{ConfigResult, GameConfig};
use crate::level::LevelParams;
use crate::rng::RandomSource;
use crate::surface::Surface;

pub const GAME_OVER_MESSAGE: &str = "Game Over! Refresh to play again.";

/// Size of the drawable area in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Axis-aligned rectangle, origin top-left, y grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Strict overlap on both axes; touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Upward velocity; positive while rising.
    pub dy: f64,
    pub jumping: bool,
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

pub struct GameEngine<R: RandomSource> {
    config: GameConfig,
    viewport: Viewport,
    rng: R,
    player: Player,
    obstacles: Vec<Obstacle>,
    params: LevelParams,
    frame: u64,
    distance: f64,
    score: u64,
    running: bool,
}

impl<R: RandomSource> GameEngine<R> {
    /// Fresh run at level 0 with the player standing on the ground. The
    /// level-0 background goes straight to `surface`.
    pub fn new(
        config: GameConfig,
        viewport: Viewport,
        mut rng: R,
        surface: &mut impl Surface,
    ) -> ConfigResult<Self> {
        config.validate()?;
        let params = LevelParams::derive(&config, 0, &mut rng);
        surface.set_background(&params.background);
        let size = config.player_size;
        let player = Player {
            x: config.player_x,
            y: viewport.height - size - config.ground_height,
            width: size,
            height: size,
            dy: 0.0,
            jumping: false,
        };
        Ok(Self {
            config,
            viewport,
            rng,
            player,
            obstacles: Vec::new(),
            params,
            frame: 0,
            distance: 0.0,
            score: 0,
            running: true,
        })
    }

    // --- Accessors -----------------------------------------------------------

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
    pub fn player(&self) -> &Player {
        &self.player
    }
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }
    pub fn level(&self) -> u32 {
        self.params.index
    }
    pub fn level_params(&self) -> &LevelParams {
        &self.params
    }
    pub fn frame(&self) -> u64 {
        self.frame
    }
    pub fn distance_travelled(&self) -> f64 {
        self.distance
    }
    pub fn score(&self) -> u64 {
        self.score
    }
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }
    pub fn is_running(&self) -> bool {
        self.running
    }
    pub fn progress_percent(&self) -> f64 {
        self.distance / self.params.duration * 100.0
    }

    /// y of the player's top edge when standing on the ground.
    pub fn ground_y(&self) -> f64 {
        self.viewport.height - self.player.height - self.config.ground_height
    }

    // --- Level ---------------------------------------------------------------

    pub fn set_level(&mut self, level: u32, surface: &mut impl Surface) {
        self.params = LevelParams::derive(&self.config, level, &mut self.rng);
        surface.set_background(&self.params.background);
    }

    /// Advance to the next level once the target distance is covered. In-flight
    /// obstacles are discarded; the player keeps its position.
    pub fn check_level_complete(&mut self, surface: &mut impl Surface) -> bool {
        if self.distance < self.params.duration {
            return false;
        }
        let next = self.params.index + 1;
        self.set_level(next, surface);
        self.distance = 0.0;
        self.frame = 0;
        self.obstacles.clear();
        console_log!(
            "level {} (speed {}, spawn every {} frames, length {})",
            next,
            self.params.speed,
            self.params.spawn_interval,
            self.params.duration
        );
        true
    }

    // --- Player --------------------------------------------------------------

    /// Start a jump if standing. Presses while airborne are dropped, not queued.
    pub fn jump(&mut self) -> bool {
        if self.player.jumping {
            return false;
        }
        self.player.jumping = true;
        self.player.dy = self.config.jump_strength;
        true
    }

    /// Gravity first, then move. The order fixes the arc's shape and length.
    pub fn update_player(&mut self) {
        if !self.player.jumping {
            return;
        }
        self.player.dy -= self.config.gravity;
        self.player.y -= self.player.dy;

        let ground = self.ground_y();
        if self.player.y >= ground {
            self.player.jumping = false;
            self.player.y = ground;
            self.player.dy = 0.0;
        }
    }

    // --- Obstacles -----------------------------------------------------------

    /// Append an obstacle at the right edge (ground level or floating) and
    /// bump the score.
    pub fn spawn_obstacle(&mut self, surface: &mut impl Surface) {
        let cfg = &self.config;
        let height = self.rng.next_f64() * cfg.obstacle_height_range + cfg.obstacle_min_height;
        let ground_top = self.viewport.height - height - cfg.ground_height;
        let y = if self.rng.next_f64() < 0.5 {
            ground_top
        } else {
            ground_top - cfg.elevated_gap
        };
        let width = self.rng.next_f64() * cfg.obstacle_width_range + cfg.obstacle_min_width;
        self.obstacles.push(Obstacle {
            x: self.viewport.width,
            y,
            width,
            height,
            color: cfg.obstacle_color.clone(),
        });

        self.score += 1;
        surface.show_score(&self.score_text());
    }

    /// Scroll every obstacle left and drop those whose right edge left the view.
    pub fn advance_obstacles(&mut self) {
        let speed = self.params.speed;
        for obstacle in self.obstacles.iter_mut() {
            obstacle.x -= speed;
        }
        self.obstacles.retain(|o| o.x + o.width >= 0.0);
    }

    /// First overlapping obstacle ends the run; the rest are not examined.
    pub fn detect_collision(&mut self, surface: &mut impl Surface) -> bool {
        let player = self.player.rect();
        if !self.obstacles.iter().any(|o| player.intersects(&o.rect())) {
            return false;
        }
        self.running = false;
        console_log!(
            "game over at level {} with score {}",
            self.params.index,
            self.score
        );
        surface.game_over(GAME_OVER_MESSAGE);
        true
    }

    // --- Frame ---------------------------------------------------------------

    /// One animation frame. Does nothing once the run has ended.
    pub fn tick(&mut self, surface: &mut impl Surface) {
        if !self.running {
            return;
        }
        surface.clear();

        self.frame += 1;
        if self.frame % self.params.spawn_interval == 0 {
            self.spawn_obstacle(surface);
        }

        let Viewport { width, height } = self.viewport;
        let ground_h = self.config.ground_height;
        surface.fill_rect(0.0, height - ground_h, width, ground_h, &self.config.ground_color);

        let p = &self.player;
        surface.fill_rect(p.x, p.y, p.width, p.height, &self.config.player_color);
        self.update_player();

        // drawn at their pre-scroll position
        for o in &self.obstacles {
            surface.fill_rect(o.x, o.y, o.width, o.height, &o.color);
        }
        self.advance_obstacles();
        self.detect_collision(surface);

        self.distance += self.params.speed;
        surface.show_progress(&format!("{}%", self.progress_percent()));
        self.check_level_complete(surface);
    }
}

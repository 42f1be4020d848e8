// crates/lab_core/src/renderer.rs

//! Host-side renderers. Neither touches pixels: `AsciiRenderer` draws a
//! coarse character grid for terminals and logs, `FrameRecorder` keeps the
//! raw views for inspection.

use glam::Vec2;
use lab_shared::{
    CameraOffset, CollectibleKind, EnemyKind, Facing, HudView, PlatformKind, Renderer,
    SpriteKind, SpriteView,
};

fn glyph(kind: &SpriteKind) -> char {
    match kind {
        SpriteKind::Platform(PlatformKind::Ground) => '#',
        SpriteKind::Platform(PlatformKind::Floating) => '=',
        SpriteKind::Platform(PlatformKind::Obstacle) => '^',
        SpriteKind::Collectible(CollectibleKind::Treat) => '*',
        SpriteKind::Collectible(CollectibleKind::TennisBall) => 'o',
        SpriteKind::Enemy(EnemyKind::Squirrel) => 's',
        SpriteKind::Enemy(EnemyKind::Cat) => 'c',
        SpriteKind::Goal => 'G',
        SpriteKind::Player {
            facing: Facing::Left,
            ..
        } => '<',
        SpriteKind::Player { .. } => '>',
    }
}

/// Character-grid view of the screen. Each cell covers `cell` pixels.
pub struct AsciiRenderer {
    cols: usize,
    rows: usize,
    cell: Vec2,
    grid: Vec<char>,
    hud: Option<HudView>,
    frame: String,
}

impl AsciiRenderer {
    /// Grid of `cols` x `rows` covering a `viewport`-sized screen.
    pub fn new(viewport: Vec2, cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            cell: viewport / Vec2::new(cols as f32, rows as f32),
            grid: vec![' '; cols * rows],
            hud: None,
            frame: String::new(),
        }
    }

    /// Last finished frame, HUD line first.
    pub fn frame(&self) -> &str {
        &self.frame
    }

    fn fill(&mut self, min: Vec2, max: Vec2, ch: char) {
        // Half-open cell ranges: a sprite ending on a cell edge stops before it.
        let cells = |v: f32, size: f32, limit: usize, round: fn(f32) -> f32| {
            round(v / size).clamp(0.0, limit as f32) as usize
        };
        let (c0, c1) = (
            cells(min.x, self.cell.x, self.cols, f32::floor),
            cells(max.x, self.cell.x, self.cols, f32::ceil),
        );
        let (r0, r1) = (
            cells(min.y, self.cell.y, self.rows, f32::floor),
            cells(max.y, self.cell.y, self.rows, f32::ceil),
        );
        for row in r0..r1 {
            for col in c0..c1 {
                self.grid[row * self.cols + col] = ch;
            }
        }
    }
}

impl Renderer for AsciiRenderer {
    fn begin_frame(&mut self, _camera: CameraOffset) {
        self.grid.fill(' ');
        self.hud = None;
    }

    fn draw_sprite(&mut self, sprite: &SpriteView, camera: CameraOffset) {
        let screen = camera.project(&sprite.bounds);
        let max = Vec2::new(screen.right(), screen.bottom());
        if max.x <= 0.0 || max.y <= 0.0 {
            return;
        }
        self.fill(screen.pos, max, glyph(&sprite.kind));
    }

    fn draw_hud(&mut self, hud: &HudView) {
        self.hud = Some(*hud);
    }

    fn end_frame(&mut self) {
        let mut out = String::with_capacity((self.cols + 1) * (self.rows + 1));
        if let Some(hud) = self.hud {
            out.push_str(&format!("Score: {}  Best: {}", hud.score, hud.best));
            if let Some(banner) = hud.state.banner() {
                out.push_str(&format!("  {banner} Press R to restart"));
            }
            out.push('\n');
        }
        for row in self.grid.chunks(self.cols) {
            out.extend(row.iter());
            // Trailing blanks carry nothing.
            while out.ends_with(' ') {
                out.pop();
            }
            out.push('\n');
        }
        self.frame = out;
    }
}

/// Keeps every view of the last frame. Test double and debugging aid.
#[derive(Default, Debug)]
pub struct FrameRecorder {
    pub frames: u64,
    pub camera: CameraOffset,
    pub sprites: Vec<SpriteView>,
    pub hud: Option<HudView>,
}

impl FrameRecorder {
    pub fn kinds(&self) -> Vec<SpriteKind> {
        self.sprites.iter().map(|s| s.kind).collect()
    }
}

impl Renderer for FrameRecorder {
    fn begin_frame(&mut self, camera: CameraOffset) {
        self.frames += 1;
        self.camera = camera;
        self.sprites.clear();
        self.hud = None;
    }

    fn draw_sprite(&mut self, sprite: &SpriteView, _camera: CameraOffset) {
        self.sprites.push(*sprite);
    }

    fn draw_hud(&mut self, hud: &HudView) {
        self.hud = Some(*hud);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lab_shared::{Aabb, GameState, Pose};

    #[test]
    fn draws_projected_sprites_and_hud() {
        let mut ascii = AsciiRenderer::new(Vec2::new(100.0, 40.0), 10, 4);
        let camera = CameraOffset::new(Vec2::new(50.0, 0.0));

        ascii.begin_frame(camera);
        ascii.draw_sprite(
            &SpriteView {
                bounds: Aabb::new(50.0, 30.0, 100.0, 10.0),
                kind: SpriteKind::Platform(PlatformKind::Ground),
            },
            camera,
        );
        ascii.draw_sprite(
            &SpriteView {
                bounds: Aabb::new(60.0, 10.0, 10.0, 20.0),
                kind: SpriteKind::Player {
                    pose: Pose::Idle,
                    facing: Facing::Right,
                    frame: 0,
                },
            },
            camera,
        );
        // Off screen to the left.
        ascii.draw_sprite(
            &SpriteView {
                bounds: Aabb::new(0.0, 0.0, 20.0, 20.0),
                kind: SpriteKind::Goal,
            },
            camera,
        );
        ascii.draw_hud(&HudView {
            score: 10,
            best: 40,
            state: GameState::Won,
        });
        ascii.end_frame();

        let lines: Vec<&str> = ascii.frame().lines().collect();
        assert_eq!(lines[0], "Score: 10  Best: 40  Level Complete! Press R to restart");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], " >");
        assert_eq!(lines[3], " >");
        assert_eq!(lines[4], "##########");
    }

    #[test]
    fn recorder_keeps_only_the_last_frame() {
        let mut recorder = FrameRecorder::default();
        let sprite = SpriteView {
            bounds: Aabb::new(0.0, 0.0, 1.0, 1.0),
            kind: SpriteKind::Goal,
        };
        for _ in 0..2 {
            recorder.begin_frame(CameraOffset::default());
            recorder.draw_sprite(&sprite, CameraOffset::default());
            recorder.end_frame();
        }
        assert_eq!(recorder.frames, 2);
        assert_eq!(recorder.kinds(), vec![SpriteKind::Goal]);
    }
}

// crates/lab_core/tests/host.rs
// Host-side plumbing: files on disk, scripted runs, score persistence.

use std::io::Write;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use lab_core::{scene, App, AppConfig, CoreError, FileScoreStore, MemoryScoreStore};
use lab_game::{CollectibleSpawn, FallPolicy, LevelDesc, Platform};
use lab_shared::{CollectibleKind, GameState, PlatformKind, ScoreStore, SoundEvent};
use tempfile::tempdir;

fn ledge() -> LevelDesc {
    let mut desc = LevelDesc::empty(1000.0, 600.0);
    desc.platforms
        .push(Platform::new(0.0, 500.0, 400.0, 100.0, PlatformKind::Ground));
    desc.collectibles
        .push(CollectibleSpawn::new(150.0, 460.0, CollectibleKind::Treat));
    desc
}

fn scripted(script: &str) -> AppConfig {
    AppConfig {
        script: Some(script.to_string()),
        frame_ms: Some(17.0),
        ..AppConfig::default()
    }
}

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn level_file_round_trips_through_ron() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stock.ron");

    scene::save_level(&path, &LevelDesc::yellow_lab()).unwrap();
    let loaded = scene::load_level(Some(&path)).unwrap();
    assert_eq!(loaded, LevelDesc::yellow_lab());
}

#[test]
fn missing_paths_fall_back_to_built_ins() {
    assert_eq!(scene::load_level(None).unwrap(), LevelDesc::yellow_lab());
    assert_eq!(scene::load_config(None).unwrap(), Default::default());
}

#[test]
fn config_file_may_set_only_some_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("game.ron");
    std::fs::write(&path, "(fall_policy: respawn)").unwrap();

    let config = scene::load_config(Some(&path)).unwrap();
    assert_eq!(config.fall_policy, FallPolicy::Respawn);
    assert_eq!(config.viewport.x, 800.0);
}

#[test]
fn broken_files_report_what_went_wrong() {
    let dir = tempdir().unwrap();

    let syntax = dir.path().join("syntax.ron");
    std::fs::write(&syntax, "(width: ").unwrap();
    assert!(matches!(
        scene::load_level(Some(&syntax)),
        Err(CoreError::Ron { .. })
    ));

    let invalid = dir.path().join("invalid.ron");
    scene::save_level(&invalid, &LevelDesc::empty(0.0, 600.0)).unwrap();
    assert!(matches!(
        scene::load_level(Some(&invalid)),
        Err(CoreError::Level(_))
    ));

    let missing = dir.path().join("missing.ron");
    assert!(matches!(
        scene::load_level(Some(&missing)),
        Err(CoreError::Io { .. })
    ));

    let camera = dir.path().join("camera.ron");
    std::fs::write(&camera, "(camera: (smoothing: 0.0))").unwrap();
    assert!(matches!(
        scene::load_config(Some(&camera)),
        Err(CoreError::Config(_))
    ));
}

#[test]
fn score_file_round_trip() {
    let dir = tempdir().unwrap();
    let mut store = FileScoreStore::new(dir.path().join("nested/best.bin"));

    assert_eq!(store.load(), 0, "missing file reads as zero");
    store.save(120);
    assert_eq!(store.read().unwrap(), 120);
    assert_eq!(FileScoreStore::new(store.path()).load(), 120);
}

#[test]
fn corrupt_score_file_reads_as_zero() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("best.bin");

    std::fs::write(&path, b"nope").unwrap();
    let mut store = FileScoreStore::new(&path);
    assert!(matches!(store.read(), Err(CoreError::Bincode(_))));
    assert_eq!(store.load(), 0);

    let mut foreign = b"XXXX".to_vec();
    foreign.extend_from_slice(&[1, 0, 0, 0, 99, 0, 0, 0]);
    std::fs::write(&path, foreign).unwrap();
    assert!(matches!(store.read(), Err(CoreError::ScoreHeader { .. })));
    assert_eq!(store.load(), 0);
}

#[test]
fn scripted_run_into_the_squirrel() {
    let mut app = App::new(scripted("right*300"))
        .unwrap()
        .with_score_store(Box::new(MemoryScoreStore::default()));

    let summary = app.run(&AtomicBool::new(true)).unwrap();
    assert_eq!(summary.frames, 300);
    assert!(summary.steps >= 300);
    assert_eq!(summary.state, GameState::Lost);
    assert_eq!(summary.score, 10);
    assert_eq!(summary.best, 10);
    assert_eq!(summary.sounds, vec![SoundEvent::Collect, SoundEvent::Lose]);
}

#[test]
fn short_frames_keep_every_jump_press() {
    // 4 ms frames: most frames run no simulation step at all.
    let config = AppConfig {
        frame_ms: Some(4.0),
        ..scripted("idle*200,jump,idle*300,jump,idle*300,jump,idle*300")
    };
    let summary = App::new(config).unwrap().run(&AtomicBool::new(true)).unwrap();

    assert_eq!(summary.frames, 1103);
    assert!(summary.steps < summary.frames / 3);
    assert_eq!(summary.state, GameState::Playing);
    assert_eq!(summary.sounds, vec![SoundEvent::Jump; 3]);
    assert_eq!(summary.sounds_played, 3);
}

#[test]
fn cleared_flag_stops_before_the_first_frame() {
    let mut app = App::new(scripted("right*10")).unwrap();
    let summary = app.run(&AtomicBool::new(false)).unwrap();
    assert_eq!((summary.frames, summary.steps), (0, 0));
    assert_eq!(summary.state, GameState::Playing);
}

#[test]
fn best_score_survives_between_runs() {
    let dir = tempdir().unwrap();
    let level = dir.path().join("ledge.ron");
    scene::save_level(&level, &ledge()).unwrap();

    let config = AppConfig {
        level: Some(level),
        score_file: Some(dir.path().join("best.bin")),
        ..scripted("right*200")
    };

    let first = App::new(config.clone()).unwrap().run(&AtomicBool::new(true)).unwrap();
    assert_eq!(first.state, GameState::Lost);
    assert_eq!(first.best, 10);

    let second = App::new(config).unwrap();
    assert_eq!(second.game().score().best, 10);
    assert_eq!(second.game().score().current, 0);
}

#[test]
fn restart_key_starts_a_new_round() {
    let dir = tempdir().unwrap();
    let level = dir.path().join("ledge.ron");
    scene::save_level(&level, &ledge()).unwrap();

    let config = AppConfig {
        level: Some(level),
        ..scripted("right*200,idle,restart,idle*5")
    };
    let summary = App::new(config).unwrap().run(&AtomicBool::new(true)).unwrap();

    assert_eq!(summary.state, GameState::Playing);
    assert_eq!(summary.score, 0);
    assert_eq!(summary.best, 10);
}

#[test]
fn ascii_frames_are_written_on_schedule() {
    let buf = SharedBuf::default();
    let config = AppConfig {
        ascii_every: Some(5),
        ..scripted("idle*10")
    };
    let mut app = App::new(config).unwrap().with_output(Box::new(buf.clone()));
    app.run(&AtomicBool::new(true)).unwrap();

    let text = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
    assert!(text.contains("--- frame 5 ---"));
    assert!(text.contains("--- frame 10 ---"));
    assert_eq!(text.matches("Score: 0  Best: 0").count(), 2);
    assert!(text.contains('>'), "player faces right at the start");
}

#[test]
fn held_keys_drive_the_player_without_a_script() {
    let mut app = App::new(AppConfig::default()).unwrap();
    app.keyboard_mut().press("d");
    for _ in 0..30 {
        app.frame(1.0 / 60.0 + 0.001);
    }
    assert!(app.game().player().position().x > 50.0);
    assert_eq!(app.registry().len(), 4);
}

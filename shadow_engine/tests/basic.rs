use se::health::{HealthState, LivingEntity};
use se::*;
use shadow_engine as se;

#[test]
fn test_command_parse() {
    use se::command::*;
    assert!(matches!(parse_command("look"), Command::Look));
    assert!(matches!(parse_command("go north"), Command::MoveTo(dir) if dir == "north"));
}

#[test]
fn test_health_never_negative() {
    let mut health = HealthState::new_at_max(5);
    health.damage(7);
    assert_eq!(health.current_hp(), 0);
    health.damage(7);
    assert_eq!(health.current_hp(), 0);
    assert_eq!(health.max_hp(), 5);
}

#[test]
fn test_player_living_entity() {
    let mut player = Player::default();
    assert!(player.is_alive());
    player.damage(player.max_hp());
    assert!(!player.is_alive());
}

#[test]
fn test_load_world_uses_config() {
    let config = GameConfig {
        player_max_hp: 7,
        enemy_max_hp: 3,
        ..GameConfig::default()
    };
    let world = load_world(&config).unwrap();
    assert_eq!(world.player.max_hp(), 7);
    assert_eq!(world.enemy_def.as_ref().unwrap().max_hp, 3);
    assert_eq!(world.title, "The Shadow Dungeon");
}

#[test]
fn test_config_file_feeds_world() {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "password = \"LANTERN\"\nplayer_max_hp = 12").unwrap();
    let config = se::config::load_config(file.path());
    let mut world = load_world(&config).unwrap();
    let mut roller = ScriptedRoller::default();
    let mut view = View::new();

    execute(&mut world, &mut roller, &mut view, "take key");
    execute(&mut world, &mut roller, &mut view, "unlock door with SHADOW");
    assert_eq!(view.errors(), vec![EngineError::WrongPassword.to_string()]);
    view.items.clear();
    execute(&mut world, &mut roller, &mut view, "unlock door with lantern");
    assert!(view.errors().is_empty());
    assert_eq!(world.player.max_hp(), 12);
}

#[test]
fn test_seeded_roller_is_repeatable() {
    let range = DamageRange::new(1, 6);
    let mut a = SeededRoller::new(2024);
    let mut b = SeededRoller::new(2024);
    for _ in 0..10 {
        assert_eq!(a.roll(range), b.roll(range));
    }
}

#[test]
fn test_quit_reports_summary() {
    let mut world = load_world(&GameConfig::default()).unwrap();
    let mut view = View::new();
    let status = execute(&mut world, &mut ScriptedRoller::default(), &mut view, "quit");
    assert_eq!(status, GameStatus::Quit);
    assert!(view.items.iter().any(|item| matches!(
        item,
        ViewItem::QuitSummary { turns: 1, visited: 1, total_rooms: 3, .. }
    )));
    // the session stays over
    let again = execute(&mut world, &mut ScriptedRoller::default(), &mut view, "look");
    assert_eq!(again, GameStatus::Quit);
}

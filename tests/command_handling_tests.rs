//! Integration tests for command dispatch: mode filtering, idempotent
//! pause/resume, and menu level selection.

use snackrun::{Command, Direction, GameState, GenerationConfig, Mode, Position};

fn fresh_state(seed: u64) -> GameState {
    GameState::new(GenerationConfig::new(seed)).expect("config should validate")
}

#[test]
fn test_menu_level_select_skips_straight_to_the_chosen_level() {
    let state = fresh_state(12345);
    let state = state.apply(Command::SelectLevel(2)).expect("select level");

    assert_eq!(state.mode(), Mode::Playing);
    assert_eq!(state.level(), 2);
    assert_eq!(state.score(), 0);
    assert_eq!(state.items().len(), 10);
    assert_eq!(state.player().position(), Position::new(19, 7));
}

#[test]
fn test_spawn_corner_blocks_every_direction_but_left() {
    let state = fresh_state(5);
    let mut state = state.apply(Command::SelectLevel(1)).expect("select level");
    let spawn = state.player().position();

    for direction in [Direction::Up, Direction::Down, Direction::Right] {
        state = state.apply(Command::Move(direction)).expect("move");
        assert_eq!(state.player().position(), spawn);
    }

    let state = state.apply(Command::Move(Direction::Left)).expect("move");
    assert_eq!(state.player().position(), Position::new(18, 7));
}

#[test]
fn test_commands_outside_their_mode_are_ignored() {
    // Movement and pause do nothing on the menu
    let state = fresh_state(1);
    let state = state.apply(Command::Move(Direction::Up)).expect("move");
    let state = state.apply(Command::Pause).expect("pause");
    let state = state.apply(Command::Resume).expect("resume");
    assert_eq!(state.mode(), Mode::MainMenu);

    // Level selection does nothing mid-game
    let state = state.apply(Command::SelectLevel(1)).expect("select level");
    let state = state.apply(Command::SelectLevel(3)).expect("select again");
    assert_eq!(state.level(), 1);

    // Returning to the menu requires pausing first
    let state = state.apply(Command::GoToMainMenu).expect("menu command");
    assert_eq!(state.mode(), Mode::Playing);
}

#[test]
fn test_pause_resume_idempotence() {
    let state = fresh_state(8);
    let state = state.apply(Command::SelectLevel(1)).expect("select level");

    // Resume while already playing changes nothing observable
    let state = state.apply(Command::Resume).expect("resume");
    assert_eq!(state.mode(), Mode::Playing);

    let state = state.apply(Command::Pause).expect("pause");
    let items_before = state.items().to_vec();
    let position_before = state.player().position();

    // Pause while already paused changes nothing observable
    let state = state.apply(Command::Pause).expect("pause again");
    assert_eq!(state.mode(), Mode::Paused);
    assert_eq!(state.items(), items_before.as_slice());
    assert_eq!(state.player().position(), position_before);

    let state = state.apply(Command::Resume).expect("resume");
    assert_eq!(state.mode(), Mode::Playing);
    assert_eq!(state.items(), items_before.as_slice());
}

#[test]
fn test_abandoning_a_level_discards_progress() {
    let state = fresh_state(21);
    let mut state = state.apply(Command::SelectLevel(3)).expect("select level");

    // Make some progress first
    for _ in 0..4 {
        state = state.apply(Command::Move(Direction::Left)).expect("move");
    }

    let state = state.apply(Command::Pause).expect("pause");
    let state = state.apply(Command::GoToMainMenu).expect("to menu");

    assert_eq!(state.mode(), Mode::MainMenu);
    assert_eq!(state.score(), 0);
    assert!(state.items().is_empty());

    // Selecting a level from here starts clean
    let state = state.apply(Command::SelectLevel(1)).expect("select level");
    assert_eq!(state.level(), 1);
    assert_eq!(state.items().len(), 10);
    assert_eq!(state.player().position(), Position::new(19, 7));
}

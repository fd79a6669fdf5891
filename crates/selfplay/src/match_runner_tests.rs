use super::*;
use chess_rules::{Move, Position, Square};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Plays a fixed list of moves, then gives up.
struct Scripted {
    moves: Vec<Move>,
}

impl Scripted {
    fn new(moves: &[(&str, &str)]) -> Self {
        Self {
            moves: moves
                .iter()
                .rev()
                .map(|&(from, to)| Move::new(sq(from), sq(to)))
                .collect(),
        }
    }
}

impl MoveSelector for Scripted {
    fn select_move(&mut self, _pos: &Position, _color: Color) -> Option<Move> {
        self.moves.pop()
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

fn config(games: u32, max_plies: u32, seed: Option<u64>) -> SelfPlayConfig {
    SelfPlayConfig {
        games,
        max_plies,
        seed,
        output: None,
    }
}

#[test]
fn test_fools_mate_is_black_win() {
    let runner = MatchRunner::new(config(1, 100, None));
    let mut white = Scripted::new(&[("f2", "f3"), ("g2", "g4")]);
    let mut black = Scripted::new(&[("e7", "e5"), ("d8", "h4")]);

    let record = runner.play_game(&mut white, &mut black).unwrap();

    assert_eq!(record.result, GameResult::BlackWins);
    assert_eq!(record.plies, 4);
    assert_eq!(record.captures, 0);
}

#[test]
fn test_players_of_different_types() {
    let runner = MatchRunner::new(config(1, 40, None));
    let mut white = Scripted::new(&[("g1", "f3"), ("f3", "g1")]);
    let mut black = CapturePreferringPlayer::with_seed(3);

    let record = runner.play_game(&mut white, &mut black).unwrap();

    // White's script runs out on its third turn
    assert_eq!(record.plies, 4);
    assert_eq!(record.result, GameResult::Unfinished);
}

#[test]
fn test_ply_cap_leaves_game_unfinished() {
    let runner = MatchRunner::new(config(1, 3, None));
    let mut white = Scripted::new(&[("g1", "f3"), ("f3", "g1")]);
    let mut black = Scripted::new(&[("g8", "f6"), ("f6", "g8")]);

    let record = runner.play_game(&mut white, &mut black).unwrap();

    assert_eq!(record.result, GameResult::Unfinished);
    assert_eq!(record.plies, 3);
}

#[test]
fn test_illegal_selection_is_an_error() {
    let runner = MatchRunner::new(config(1, 10, None));
    let mut white = Scripted::new(&[("e2", "e5")]);
    let mut black = Scripted::new(&[]);

    assert!(runner.play_game(&mut white, &mut black).is_err());
}

#[test]
fn test_self_play() {
    let runner = MatchRunner::new(config(3, 60, Some(11)));
    let results = runner.run().unwrap();

    // Self-play should complete without panic
    assert_eq!(results.games.len(), 3);
    assert_eq!(
        results.white_wins() + results.black_wins() + results.stalemates() + results.unfinished(),
        3
    );
    for game in &results.games {
        assert!(game.plies <= 60);
        if game.result == GameResult::Unfinished {
            assert_eq!(game.plies, 60);
        }
    }
}

#[test]
fn test_seeded_runs_repeat() {
    let a = MatchRunner::new(config(2, 80, Some(5))).run().unwrap();
    let b = MatchRunner::new(config(2, 80, Some(5))).run().unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_result_from_status() {
    assert_eq!(
        GameResult::from_status(GameStatus::Checkmate {
            loser: Color::Black
        }),
        GameResult::WhiteWins
    );
    assert_eq!(
        GameResult::from_status(GameStatus::Stalemate),
        GameResult::Stalemate
    );
    assert_eq!(
        GameResult::from_status(GameStatus::Ongoing),
        GameResult::Unfinished
    );
}

use super::*;

fn sq(row: usize, col: usize) -> Square {
    Square::new(row, col).unwrap()
}

#[test]
fn test_blank_line() {
    assert_eq!(Command::parse("   ").unwrap(), None);
}

#[test]
fn test_simple_commands() {
    assert_eq!(Command::parse("start").unwrap(), Some(Command::Start));
    assert_eq!(Command::parse("PAUSE").unwrap(), Some(Command::Pause));
    assert_eq!(Command::parse("log").unwrap(), Some(Command::Log { json: false }));
    assert_eq!(Command::parse("log json").unwrap(), Some(Command::Log { json: true }));
    assert_eq!(Command::parse("auto off").unwrap(), Some(Command::Auto(false)));
    assert_eq!(Command::parse("q").unwrap(), Some(Command::Quit));
}

#[test]
fn test_move_accepts_both_separators() {
    assert_eq!(
        Command::parse("move 3,0 2-0").unwrap(),
        Some(Command::Move(sq(3, 0), sq(2, 0)))
    );
    assert_eq!(
        Command::parse("s 4,1").unwrap(),
        Some(Command::Select(sq(4, 1)))
    );
}

#[test]
fn test_malformed_input() {
    assert!(Command::parse("move 3,0").is_err());
    assert!(Command::parse("move 3,0 9,9").is_err());
    assert!(Command::parse("select a1").is_err());
    assert!(Command::parse("start now").is_err());
    assert!(Command::parse("castle").is_err());
}

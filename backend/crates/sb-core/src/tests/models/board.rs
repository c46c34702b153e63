use crate::{Board, Card};

use uuid::Uuid;

#[test]
fn test_board_seeded_layout() {
    let board = Board::seeded();

    let titles: Vec<&str> = board.columns.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["To Do", "In Progress", "Done"]);
    assert!(board.columns.iter().all(|c| c.cards.is_empty()));
}

#[test]
fn test_board_column_lookup() {
    let board = Board::seeded();
    let wanted = board.columns[1].id;

    assert_eq!(board.column(wanted).unwrap().title, "In Progress");
    assert!(board.column(Uuid::new_v4()).is_none());
}

#[test]
fn test_card_new_has_empty_description() {
    let card = Card::new("Write standup notes".to_string());

    assert_eq!(card.text, "Write standup notes");
    assert_eq!(card.description, "");
}

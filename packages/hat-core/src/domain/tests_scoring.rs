use crate::domain::scoring::{PlayerScore, ScoreBoard};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn credit_guess_moves_exactly_four_counters() {
    let order = names(&["ann", "bob", "cleo"]);
    let mut board: ScoreBoard<String> = ScoreBoard::new();

    board.credit_guess(&order[0], &order[1]);

    assert_eq!(board.total(&order[0]), 1);
    assert_eq!(board.explained(&order[0]), 1);
    assert_eq!(board.guessed(&order[0]), 0);

    assert_eq!(board.total(&order[1]), 1);
    assert_eq!(board.explained(&order[1]), 0);
    assert_eq!(board.guessed(&order[1]), 1);

    // Bystander untouched.
    assert_eq!(board.total(&order[2]), 0);
    assert_eq!(board.explained(&order[2]), 0);
    assert_eq!(board.guessed(&order[2]), 0);
}

#[test]
fn unknown_players_read_as_zero() {
    let board: ScoreBoard<String> = ScoreBoard::new();
    assert_eq!(board.total(&"nobody".to_string()), 0);
}

#[test]
fn standings_include_zero_scorers_and_sort_by_total() {
    let order = names(&["ann", "bob", "cleo", "dan"]);
    let mut board: ScoreBoard<String> = ScoreBoard::new();

    // cleo leads twice successfully, bob once.
    board.credit_guess(&order[2], &order[0]);
    board.credit_guess(&order[2], &order[3]);
    board.credit_guess(&order[1], &order[3]);

    let rows = board.standings(&order);
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].player, "cleo");
    assert_eq!(rows[0].total, 2);
    assert_eq!(rows[0].explained, 2);
    assert_eq!(rows[0].guessed, 0);
    // dan guessed twice, ann and bob hold one point each.
    assert_eq!(rows[1].player, "dan");
    assert_eq!(rows[1].total, 2);
    assert_eq!(rows[1].guessed, 2);
    assert_eq!(rows[2].player, "ann");
    assert_eq!(rows[3].player, "bob");
}

#[test]
fn standings_break_ties_by_seating_order() {
    let order = names(&["ann", "bob", "cleo"]);
    let mut board: ScoreBoard<String> = ScoreBoard::new();

    // bob and cleo tie on one point; the table must keep seating order
    // between them, with scoreless ann last.
    board.credit_guess(&order[1], &order[2]);

    let rows = board.standings(&order);
    assert_eq!(rows[0].player, "bob");
    assert_eq!(rows[1].player, "cleo");
    assert_eq!(rows[2].player, "ann");
    let totals: Vec<u32> = rows.iter().map(|r| r.total).collect();
    assert_eq!(totals, vec![1, 1, 0]);
}

#[test]
fn standings_rows_serialize_for_transports() {
    let row = PlayerScore {
        player: "ann".to_string(),
        total: 3,
        explained: 2,
        guessed: 1,
    };
    let json = serde_json::to_value(&row).expect("serializable row");
    assert_eq!(json["player"], "ann");
    assert_eq!(json["total"], 3);
    assert_eq!(json["explained"], 2);
    assert_eq!(json["guessed"], 1);
}

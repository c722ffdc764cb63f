use flowsolve::order::order_colors;
use flowsolve::reader::parse_puzzle;

#[test]
fn colors_starting_near_a_wall_branch_first() {
    // A is read first but starts in the interior; B hugs the edges.
    let text = ".....\n.A.A.\n.....\nB....\n....B\n";
    let (mut info, _) = parse_puzzle(text, "walls").unwrap();
    order_colors(&mut info, false);
    assert_eq!(&info.color_order[..2], &[1, 0]);
}

#[test]
fn deeper_goals_win_among_equal_starts() {
    // Both colors start on the edge; B's goal is buried one ring in.
    let text = "A....\n....A\nB....\n..B..\n.....\n";
    let (mut info, _) = parse_puzzle(text, "goals").unwrap();
    order_colors(&mut info, false);
    assert_eq!(&info.color_order[..2], &[1, 0]);
}

#[test]
fn longer_runs_win_among_equal_wall_distances() {
    // Both pairs hug the edge; B's endpoints are further apart.
    let text = "A.A..\nB...B\n.....\n.....\n.....\n";
    let (mut info, _) = parse_puzzle(text, "spans").unwrap();
    order_colors(&mut info, false);
    assert_eq!(&info.color_order[..2], &[1, 0]);
}

#[test]
fn shuffling_keeps_the_order_a_permutation() {
    let (mut info, _) = parse_puzzle("RB...\n.Y...\n.GO..\n.GOYB\n....R\n", "classic").unwrap();
    order_colors(&mut info, true);
    let mut seen = [false; 5];
    for &color in &info.color_order[..5] {
        assert!(!seen[color]);
        seen[color] = true;
    }
}

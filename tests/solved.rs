use flowsolve::board::Dir;
use flowsolve::reader::parse_puzzle;

#[test]
fn test_manual_solution() {
    let (info, mut state) = parse_puzzle("RB...\n.Y...\n.GO..\n.GOYB\n....R\n", "classic").unwrap();

    // G and O touch their partners and close at load.
    assert_eq!(state.completed, 0b11000);

    let red = [
        Dir::Down,
        Dir::Down,
        Dir::Down,
        Dir::Down,
        Dir::Right,
        Dir::Right,
        Dir::Right,
    ];
    let blue = [Dir::Right, Dir::Right, Dir::Right, Dir::Down, Dir::Down];
    let yellow = [Dir::Right, Dir::Right, Dir::Down];

    for dir in red {
        assert!(state.can_move(&info, 0, dir));
        state.make_move(&info, 0, dir);
    }
    for dir in blue {
        assert!(state.can_move(&info, 1, dir));
        state.make_move(&info, 1, dir);
    }
    for dir in yellow {
        assert!(state.can_move(&info, 2, dir));
        state.make_move(&info, 2, dir);
    }

    assert_eq!(state.num_free, 0);
    assert_eq!(state.completed, 0b11111);
    assert!(
        state.is_solved(&info),
        "The manually traced puzzle should be solved."
    );
}

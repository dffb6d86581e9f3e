use tui_snake::core::{GameBoard, Session, Snake, SnakeBody};
use tui_snake::term::{AnchorY, GameView, Viewport, FOOD_COLOR, SEGMENT_COLORS};
use tui_snake::types::{Cell, Direction};

fn session_with_body(width: u16, height: u16, cells: &[(i32, i32)]) -> Session {
    let mut board = GameBoard::with_seed(width, height, 1);
    let body = SnakeBody::from_segments(cells.iter().map(|&c| Cell::from(c))).unwrap();
    *board.snake_mut() = Snake::with_body(body, Direction::Right);
    board.set_food(Cell::new(width as i32 - 1, 0));
    Session::new(board)
}

#[test]
fn term_view_renders_border_corners() {
    let session = session_with_body(10, 10, &[(0, 0)]);
    let view = GameView::default();

    // 10 cells * 2 columns + border => 22x12
    let fb = view.render(&session, Viewport::new(22, 12));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 11).unwrap().ch, '└');
    assert_eq!(fb.get(21, 11).unwrap().ch, '┘');
}

#[test]
fn term_view_cycles_segment_colors() {
    let session = session_with_body(10, 10, &[(0, 2), (1, 2), (2, 2), (3, 2)]);
    let view = GameView::default();
    let fb = view.render(&session, Viewport::new(22, 12));

    // Cell (x, 2) starts at column 1 + 2x, row 3.
    for (x, color) in [(0u16, 0usize), (1, 1), (2, 2), (3, 0)] {
        let g = fb.get(1 + 2 * x, 3).unwrap();
        assert_eq!(g.ch, '█');
        assert_eq!(g.style.fg, SEGMENT_COLORS[color]);
    }
}

#[test]
fn term_view_draws_food() {
    let session = session_with_body(10, 10, &[(0, 2)]);
    let fb = GameView::default().render(&session, Viewport::new(22, 12));
    let g = fb.get(19, 1).unwrap();
    assert_eq!(g.ch, '▓');
    assert_eq!(g.style.fg, FOOD_COLOR);
}

#[test]
fn term_view_draws_score_on_bottom_row() {
    let session = session_with_body(10, 10, &[(0, 2), (1, 2), (2, 2)]);
    let fb = GameView::default().render(&session, Viewport::new(22, 12));
    // Bottom grid row is y = 9 => terminal row 10.
    assert_eq!(fb.get(1, 10).unwrap().ch, '3');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let session = session_with_body(10, 10, &[(0, 0)]);
    let fb = GameView::default().render(&session, Viewport::new(60, 12));
    let all = fb.text();
    assert!(all.contains("SCORE"));
    assert!(all.contains("right"));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let mut session = session_with_body(3, 6, &[(0, 0)]);
    while !session.halted() {
        session.frame();
    }
    let fb = GameView::default().render(&session, Viewport::new(40, 16));
    assert!(fb.text().contains("GAME OVER"));
    assert!(fb.text().contains("out of bounds"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let session = session_with_body(10, 10, &[(0, 0)]);
    let fb = GameView::default().render(&session, Viewport::new(22, 20));
    // start_y = (20 - 12) / 2 = 4
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let session = session_with_body(10, 10, &[(0, 0)]);
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&session, Viewport::new(22, 20));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

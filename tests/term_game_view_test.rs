use blockfall::core::{GameConfig, GameSnapshot, Phase, SequencePicker, Session};
use blockfall::term::{AnchorY, GameView, Viewport};
use blockfall::types::{PieceKind, BOARD_HEIGHT};

fn screen_text(fb: &blockfall::term::FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSnapshot::default();
    let view = GameView::default();

    // board pixels = 10*2 by 21*1 => 20x21, plus border => 22x23
    let fb = view.render(&snap, Viewport::new(22, 23));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 22).unwrap().ch, '└');
    assert_eq!(fb.get(21, 22).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_floor_row_at_bottom_two_chars_wide() {
    let mut snap = GameSnapshot::default();
    snap.board[0][0] = true;

    let fb = GameView::default().render(&snap, Viewport::new(22, 23));

    // Inside border: row y = 0 is the last row above the bottom border.
    assert_eq!(fb.get(1, 21).unwrap().ch, '█');
    assert_eq!(fb.get(2, 21).unwrap().ch, '█');
    assert_ne!(fb.get(1, 1).unwrap().ch, '█');
}

#[test]
fn term_view_draws_top_row_below_top_border() {
    let mut snap = GameSnapshot::default();
    snap.board[BOARD_HEIGHT - 1][9] = true;

    let fb = GameView::default().render(&snap, Viewport::new(22, 23));
    assert_eq!(fb.get(19, 1).unwrap().ch, '█');
    assert_eq!(fb.get(20, 1).unwrap().ch, '█');
}

#[test]
fn term_view_shows_match_over_overlay() {
    let mut snap = GameSnapshot::default();
    let view = GameView::default();

    let fb = view.render(&snap, Viewport::new(22, 23));
    assert!(!screen_text(&fb).contains("MATCH OVER"));

    snap.phase = Phase::MatchOver;
    let fb = view.render(&snap, Viewport::new(22, 23));
    assert!(screen_text(&fb).contains("MATCH OVER"));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let session = Session::with_picker(
        GameConfig::default(),
        SequencePicker::new(vec![PieceKind::T]),
    );
    let snap = session.snapshot();
    let view = GameView::default();

    let narrow = screen_text(&view.render(&snap, Viewport::new(22, 23)));
    assert!(!narrow.contains("ROWS"));

    let wide = screen_text(&view.render(&snap, Viewport::new(60, 23)));
    assert!(wide.contains("ROWS  0"));
    assert!(wide.contains("STATE falling"));
    assert!(wide.contains("PIECE T"));
}

#[test]
fn term_view_renders_live_session_cells() {
    let session = Session::with_picker(
        GameConfig::default(),
        SequencePicker::new(vec![PieceKind::O]),
    );
    let fb = GameView::default().render(&session.snapshot(), Viewport::new(22, 23));

    // O spawns covering columns 5..=6 on rows 19..=20 (screen rows 2 and 1).
    for screen_y in [1u16, 2] {
        for screen_x in 11..=14 {
            assert_eq!(fb.get(screen_x, screen_y).unwrap().ch, '█');
        }
    }
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameSnapshot::default();

    let fb = GameView::default().render(&snap, Viewport::new(22, 31));
    // start_y = (31 - 23) / 2 = 4
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(22, 31));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

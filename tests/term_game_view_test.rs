use rand::rngs::StdRng;
use rand::SeedableRng;

use mattris::core::{Game, GameConfig};
use mattris::term::game_view::{PAUSED_TEXT, START_TEXT};
use mattris::term::{AnchorY, FrameBuffer, GameView, Rgb, Viewport};
use mattris::types::{ColorId, GamePhase};

fn game() -> Game<StdRng> {
    Game::with_rng(GameConfig::default(), StdRng::seed_from_u64(1)).unwrap()
}

fn screen(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = game().snapshot();
    let view = GameView::default();

    // With cell_w=2: board = 10*2 by 20 => 20x20, plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = game().snapshot();
    snap.cells[19 * 10] = Some(ColorId::Blue);

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let y0 = 1 + 19;
    assert_eq!(fb.get(1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(2, y0).unwrap().ch, '█');
    assert_eq!(fb.get(3, y0).unwrap().ch, '·');
}

#[test]
fn term_view_shows_start_prompt_then_pause() {
    let mut game = game();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let vp = Viewport::new(60, 24);

    assert!(screen(&view.render(&game.snapshot(), vp)).contains(START_TEXT));

    game.toggle_pause_or_start();
    let running = screen(&view.render(&game.snapshot(), vp));
    assert!(!running.contains(START_TEXT));
    assert!(running.contains("NEXT"));

    game.toggle_pause_or_start();
    assert_eq!(game.phase(), GamePhase::Paused);
    assert!(screen(&view.render(&game.snapshot(), vp)).contains(PAUSED_TEXT));
}

#[test]
fn term_view_draws_active_piece_at_spawn() {
    let mut game = game();
    game.toggle_pause_or_start();
    let snap = game.snapshot();
    let active = snap.active.unwrap();

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(22, 22));

    for (row, col) in active.cells() {
        let cell = fb.get(1 + 2 * col as u16, 1 + row as u16).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::from(active.color.rgb()));
    }
}

#[test]
fn render_into_reuses_the_framebuffer() {
    let game = game();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    view.render_into(&game.snapshot(), Viewport::new(40, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 24));
    view.render_into(&game.snapshot(), Viewport::new(30, 22), &mut fb);
    assert_eq!(fb.cells().len(), 30 * 22);
}

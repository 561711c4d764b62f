use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use mattris::core::grid::Grid;
use mattris::core::line_clear::{clear_and_collapse, find_clearable_rows};
use mattris::core::piece::PieceController;
use mattris::core::{Game, GameConfig, GameSnapshot};
use mattris::term::{FrameBuffer, GameView, Viewport};
use mattris::types::{ColorId, GamePhase, TICK_MS};

fn running_game() -> Game<StdRng> {
    let mut game = Game::with_rng(GameConfig::default(), StdRng::seed_from_u64(12345)).unwrap();
    game.toggle_pause_or_start();
    game
}

fn bench_tick(c: &mut Criterion) {
    let mut game = running_game();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if game.phase() == GamePhase::GameOver {
                game.toggle_pause_or_start();
            }
            game.tick(black_box(TICK_MS));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::new(20, 10);
            for row in 16..20 {
                for col in 0..10 {
                    let _ = grid.occupy(row, col, ColorId::Red);
                }
            }
            let rows = find_clearable_rows(black_box(16), None, &grid);
            clear_and_collapse(&rows, &mut grid);
            grid
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut pieces = PieceController::new(StdRng::seed_from_u64(12345), 10);

    c.bench_function("spawn_piece", |b| b.iter(|| pieces.spawn()));
}

fn bench_try_move(c: &mut Criterion) {
    let mut game = running_game();

    c.bench_function("try_move", |b| {
        b.iter(|| {
            game.move_left();
            game.move_right();
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut game = running_game();

    c.bench_function("try_rotate", |b| b.iter(|| game.rotate()));
}

fn bench_render(c: &mut Criterion) {
    let game = running_game();
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            game.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_try_move,
    bench_try_rotate,
    bench_render
);
criterion_main!(benches);

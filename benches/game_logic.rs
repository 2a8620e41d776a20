use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ledtris::core::{Board, GameState};
use ledtris::term::{brightness_frame, pack_frame, PanelStatus, PanelView, TermBuffer, Viewport};
use ledtris::types::Action;

fn bench_step(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("step_idle_frame", |b| {
        b.iter(|| {
            state.step(black_box(Action::None));
        })
    });
}

fn bench_step_drop(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("step_soft_drop", |b| {
        b.iter(|| {
            state.step(black_box(Action::Down));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::default();
            for row in 8..12 {
                board.fill_row_except(row, &[]);
            }
            black_box(board.check_lines());
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            state.spawn_piece();
        })
    });
}

fn bench_safe_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let mut delta = 1;

    c.bench_function("do_safe_move", |b| {
        b.iter(|| {
            if !state.do_safe_move((0, delta)) {
                delta = -delta;
            }
        })
    });
}

fn bench_safe_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("do_safe_rotate", |b| {
        b.iter(|| {
            state.do_safe_rotate();
        })
    });
}

fn bench_panel(c: &mut Criterion) {
    let state = GameState::new(12345);
    let view = PanelView::default();
    let mut buf = TermBuffer::new(80, 24);

    c.bench_function("panel_render_and_pack", |b| {
        b.iter(|| {
            let levels = brightness_frame(state.render());
            view.render_into(&levels, &PanelStatus::default(), Viewport::new(80, 24), &mut buf);
            black_box(pack_frame(&levels, false));
        })
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_step_drop,
    bench_line_clear,
    bench_piece_spawn,
    bench_safe_move,
    bench_safe_rotate,
    bench_panel
);
criterion_main!(benches);

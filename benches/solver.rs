use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_hanoi::core::{solve_moves, MoveSequence, Playback};
use tui_hanoi::types::PlaybackState;

fn bench_solve_moves(c: &mut Criterion) {
    c.bench_function("solve_moves_10", |b| {
        b.iter(|| solve_moves(black_box(10)).unwrap())
    });
}

fn bench_lazy_sequence(c: &mut Criterion) {
    c.bench_function("move_sequence_10_drain", |b| {
        b.iter(|| MoveSequence::new(black_box(10)).unwrap().count())
    });
}

fn bench_full_replay(c: &mut Criterion) {
    c.bench_function("replay_10_disks", |b| {
        b.iter(|| {
            let mut playback = Playback::new(black_box(10)).unwrap();
            playback.start().unwrap();
            while playback.state() == PlaybackState::Running {
                playback.step().unwrap();
            }
            playback.moves_made()
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut playback = Playback::new(10).unwrap();
    playback.start().unwrap();
    for _ in 0..500 {
        playback.step().unwrap();
    }

    c.bench_function("snapshot_mid_run", |b| b.iter(|| playback.snapshot()));
}

criterion_group!(
    benches,
    bench_solve_moves,
    bench_lazy_sequence,
    bench_full_replay,
    bench_snapshot
);
criterion_main!(benches);

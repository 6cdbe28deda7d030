use criterion::{black_box, criterion_group, criterion_main, Criterion};
use arc_core::{Command, Console, Oscilloscope, Param, WaveformState};

fn bench_waveform_tick_1000(c: &mut Criterion) {
    let mut state = WaveformState::new(0.05);
    c.bench_function("waveform_tick_1000", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                black_box(state.tick());
            }
        });
    });
}

fn bench_scope_full_sweep(c: &mut Criterion) {
    c.bench_function("scope_full_sweep", |b| {
        b.iter(|| {
            let mut scope = Oscilloscope::default();
            // Default period 30 s at 0.05 s per tick.
            for _ in 0..600 {
                black_box(scope.tick());
            }
            black_box(scope.sine().len());
        });
    });
}

fn bench_evaluate_1000(c: &mut Criterion) {
    let mut state = WaveformState::default();
    state.set(Param::Amplitude, 5.0);
    state.set(Param::Phase, 1.0);
    c.bench_function("evaluate_1000", |b| {
        b.iter(|| {
            for i in 0..1000 {
                black_box(state.evaluate(i as f64 * 0.03));
            }
        });
    });
}

fn bench_parse_commands(c: &mut Criterion) {
    let lines = ["set amplitude 5", "INFO", "ls", "set period 12", "bogus verb"];
    c.bench_function("parse_commands", |b| {
        b.iter(|| {
            for line in &lines {
                let _ = black_box(Command::parse(line));
            }
        });
    });
}

fn bench_console_execute(c: &mut Criterion) {
    let mut state = WaveformState::default();
    c.bench_function("console_execute", |b| {
        b.iter(|| {
            let mut console = Console::new();
            console.execute("set phase 4", &mut state);
            console.execute("info", &mut state);
            black_box(console.len());
        });
    });
}

criterion_group!(
    benches,
    bench_waveform_tick_1000,
    bench_scope_full_sweep,
    bench_evaluate_1000,
    bench_parse_commands,
    bench_console_execute,
);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use war_mission::board::{Color, Registry, Territory};
use war_mission::mission::{generate_mission, Mission};
use war_mission::resolve::{check_victory, resolve_attack};
use war_mission::simulate::{play_game, SimulationConfig};

fn bench_resolve_attack(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(1);
    c.bench_function("resolve_attack", |b| {
        b.iter(|| {
            let mut attacker = Territory::new("Mexico", Color::Yellow, 50);
            let mut defender = Territory::new("Texas", Color::Blue, 50);
            resolve_attack(black_box(&mut attacker), black_box(&mut defender), &mut rng)
        })
    });
}

fn bench_check_victory(c: &mut Criterion) {
    let registry = Registry::initial();
    let destroy = Mission::from_id(1, Color::Green);
    let conquer = Mission::from_id(2, Color::Blue);
    c.bench_function("check_victory_destroy", |b| {
        b.iter(|| check_victory(black_box(&registry), black_box(&destroy), Color::Yellow))
    });
    c.bench_function("check_victory_conquer", |b| {
        b.iter(|| check_victory(black_box(&registry), black_box(&conquer), Color::Yellow))
    });
}

fn bench_generate_mission(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(2);
    c.bench_function("generate_mission", |b| {
        b.iter(|| generate_mission(black_box(Color::Blue), &mut rng))
    });
}

fn bench_play_game(c: &mut Criterion) {
    let config = SimulationConfig::default();
    let mut rng = SmallRng::seed_from_u64(3);
    c.bench_function("play_game", |b| {
        b.iter(|| play_game(black_box(&config), 0, &mut rng))
    });
}

criterion_group!(
    benches,
    bench_resolve_attack,
    bench_check_victory,
    bench_generate_mission,
    bench_play_game
);
criterion_main!(benches);

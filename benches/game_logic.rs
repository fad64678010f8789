use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pairs::core::{BoardSize, GameSnapshot, MemoryGame, SimpleRng};
use pairs::term::{BoardView, FrameBuffer, HudView, Viewport};

fn bench_deal(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("deal_large_icons", |b| {
        b.iter(|| MemoryGame::with_default_icons(black_box(BoardSize::Large), &mut rng))
    });
}

fn bench_deal_remote(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let refs: Vec<String> = (0..12).map(|i| format!("https://img.example/{i}.png")).collect();

    c.bench_function("deal_large_remote", |b| {
        b.iter(|| MemoryGame::with_remote_images(BoardSize::Large, black_box(&refs), &mut rng))
    });
}

fn bench_play_through(c: &mut Criterion) {
    let game = MemoryGame::with_default_icons(BoardSize::Large, &mut SimpleRng::new(7)).unwrap();
    let cards = game.cards();
    let mut order = Vec::with_capacity(cards.len());
    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            if cards[i].matches(&cards[j]) {
                order.push(i);
                order.push(j);
            }
        }
    }

    c.bench_function("play_large_perfect", |b| {
        b.iter(|| {
            let mut g = game.clone();
            for &p in &order {
                let _ = g.flip_card(black_box(p));
            }
            g.has_won()
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let game = MemoryGame::with_default_icons(BoardSize::Large, &mut SimpleRng::new(7)).unwrap();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into_large", |b| {
        b.iter(|| game.snapshot_into(black_box(&mut snap)))
    });
}

fn bench_render(c: &mut Criterion) {
    let game = MemoryGame::with_default_icons(BoardSize::Large, &mut SimpleRng::new(7)).unwrap();
    let snap = game.snapshot();
    let view = BoardView::new();
    let mut fb = FrameBuffer::new(80, 24);
    let hud = HudView {
        title: "Memory Game",
        pairs: "Pairs: 0 / 12",
        moves: "Moves: 0",
        message: None,
    };

    c.bench_function("render_large_80x24", |b| {
        b.iter(|| view.render_into(&snap, &hud, black_box(5), Viewport::new(80, 24), &mut fb))
    });
}

criterion_group!(
    benches,
    bench_deal,
    bench_deal_remote,
    bench_play_through,
    bench_snapshot,
    bench_render
);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use fibsq_stark::channel::Channel;
use fibsq_stark::field::FieldElement;

fn bench_prover_channel(c: &mut Criterion) {
    c.bench_function("channel_send_draw_256", |b| {
        b.iter(|| {
            let mut channel = Channel::prover();
            for i in 0..256u64 {
                channel
                    .send_field_element("value", FieldElement::from(i), i % 2 == 0)
                    .expect("send");
                channel.send_random_field_element("beta");
            }
            channel.state()
        });
    });
}

fn bench_replay(c: &mut Criterion) {
    let mut prover = Channel::prover();
    for i in 0..256u64 {
        prover
            .send_field_element("value", FieldElement::from(i), true)
            .expect("send");
        prover.send_random_field_element("beta");
    }
    let index = prover.send_random_int(0, 8191, "query").expect("draw");
    let entries = prover.into_entries();

    c.bench_function("channel_replay_256", |b| {
        b.iter_batched(
            || Channel::verifier(entries.clone()),
            |mut verifier| {
                for _ in 0..256 {
                    verifier.receive_field_element("value", true).expect("receive");
                    verifier.receive_random_field_element("beta");
                }
                assert_eq!(verifier.receive_random_int(0, 8191, "query").expect("draw"), index);
                verifier.finish().expect("consumed")
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_prover_channel, bench_replay);
criterion_main!(benches);

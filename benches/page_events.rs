// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use pumpey_site::config::SiteConfig;
use pumpey_site::dom::memory::fixture::landing_page;
use pumpey_site::dom::Dom;
use pumpey_site::i18n::I18n;
use pumpey_site::runtime::headless::HeadlessHost;
use pumpey_site::ui::signup::SimulatedClient;
use std::hint::black_box;
use std::time::Duration;

fn boot() -> HeadlessHost {
    let (dom, _) = landing_page();
    let config = SiteConfig {
        language: Some("en-US".to_string()),
        ..SiteConfig::default()
    };
    let i18n = I18n::new(&config);
    HeadlessHost::boot(dom, config, i18n, Box::new(SimulatedClient::default()))
}

fn page_events_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_events");

    group.bench_function("boot_landing_page", |b| {
        b.iter(|| black_box(boot()));
    });

    group.bench_function("scroll_burst_one_frame", |b| {
        b.iter_batched(
            boot,
            |mut host| {
                for y in (0..20).map(|step| f64::from(step) * 40.0) {
                    host.scroll_to(black_box(y));
                }
                host.advance(Duration::from_millis(16));
                host
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("signup_round_trip", |b| {
        b.iter_batched(
            boot,
            |mut host| {
                host.type_email(black_box("ada@example.org"));
                host.submit();
                host.advance(Duration::from_millis(6000));
                host
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn selector_benchmark(c: &mut Criterion) {
    let (dom, _) = landing_page();
    c.bench_function("query_reveal_targets", |b| {
        b.iter(|| black_box(dom.query_all(black_box(".feature-card, .roadmap-item, .about-grid > div"))));
    });
}

criterion_group!(benches, page_events_benchmark, selector_benchmark);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use nox_client::models::{JournalEntry, JournalKind, MealEntry, MealName, Provider};
use nox_client::store::journal::journal_key;
use nox_client::store::{FileStore, JournalStore, KeyValueStore, KvJournal, MemoryStore};
use std::hint::black_box;
use std::sync::Arc;

fn meal_entry(n: usize) -> JournalEntry {
    let meal = MealEntry {
        date: "2026-03-02".to_string(),
        meal_name: MealName::Lunch.to_string(),
        description: format!("150g chicken, 180g rice #{}", n),
        estimated_calories: None,
        identity: Some("Alex".to_string()),
        provider: Some("guest".to_string()),
    };
    JournalEntry::new(
        JournalKind::Meal,
        Provider::Guest,
        "2026-03-02T12:30:00.000".to_string(),
        &meal,
    )
    .expect("Failed to build entry")
}

/// Write `len` entries for Alex straight into the backend.
fn seed(backend: &dyn KeyValueStore, len: usize) {
    let entries: Vec<JournalEntry> = (0..len).map(meal_entry).collect();
    let raw = serde_json::to_string(&entries).expect("Failed to serialize seed");
    backend
        .put(&journal_key("Alex"), &raw)
        .expect("Failed to seed journal");
}

fn benchmark_journal_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("journal_append");

    // Append rewrites the whole sequence, so cost grows with history
    for len in [10, 100, 1000] {
        group.bench_function(format!("memory_{}", len), |b| {
            b.iter_batched(
                || {
                    let backend = Arc::new(MemoryStore::new());
                    seed(backend.as_ref(), len);
                    KvJournal::new(backend)
                },
                |journal| journal.append(black_box("Alex"), meal_entry(len)),
                BatchSize::SmallInput,
            )
        });
    }

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let backend = Arc::new(FileStore::open(dir.path()).expect("Failed to open store"));
    seed(backend.as_ref(), 100);
    let journal = KvJournal::new(backend).with_max_entries(100);
    group.bench_function("file_capped_100", |b| {
        b.iter(|| journal.append(black_box("Alex"), meal_entry(0)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_journal_append);
criterion_main!(benches);

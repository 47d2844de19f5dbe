//! # Transaction Pipeline Benchmarks
//!
//! ```bash
//! cargo bench -p hashgraph-tests --bench pipeline_benchmarks
//! cargo bench -p hashgraph-tests --bench pipeline_benchmarks -- pipeline/sign
//! ```
//!
//! | Group | Measures |
//! |-------|----------|
//! | pipeline/freeze | body construction for N nodes |
//! | pipeline/sign | one signer over every (chunk, node) entry |
//! | pipeline/bytes | `to_bytes` and `from_bytes` of a signed transaction |
//! | pipeline/chunks | multi-chunk file append end to end |
//! | entity_id/checksum | checksum computation and checked parsing |

use std::collections::HashMap;
use std::hint::black_box;
use std::num::NonZeroUsize;
use std::time::Duration;

use chrono::DateTime;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use hashgraph_sdk::entity_id::checksum;
use hashgraph_sdk::{
    AccountId, Client, FileAppendTransaction, FileId, Hbar, LedgerId, PrivateKey, TransactionId,
    TransferTransaction,
};

fn client_with_nodes(count: u64) -> Client {
    let network: HashMap<_, _> =
        (0..count).map(|i| (format!("127.0.0.1:{}", 50211 + i), AccountId::new(0, 0, 3 + i))).collect();

    let client = Client::for_network(network).unwrap();
    client.set_operator(AccountId::new(0, 0, 1001), PrivateKey::generate_ed25519());
    client
}

fn transfer() -> TransferTransaction {
    let valid_start = DateTime::from_timestamp(1_700_000_000, 0).unwrap();

    let mut transaction = TransferTransaction::new();
    transaction
        .hbar_transfer(AccountId::new(0, 0, 1001), Hbar::new(-5))
        .unwrap()
        .hbar_transfer(AccountId::new(0, 0, 1002), Hbar::new(5))
        .unwrap()
        .transaction_id(TransactionId::new(AccountId::new(0, 0, 1001), valid_start))
        .unwrap();
    transaction
}

fn bench_freeze(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/freeze");

    for nodes in [1u64, 7, 28] {
        let client = client_with_nodes(nodes);
        group.throughput(Throughput::Elements(nodes));
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &client, |b, client| {
            b.iter_batched(
                transfer,
                |mut transaction| {
                    transaction.freeze_with(client).unwrap();
                    black_box(transaction)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/sign");
    let ed25519 = PrivateKey::generate_ed25519();
    let ecdsa = PrivateKey::generate_ecdsa();

    for nodes in [1u64, 7, 28] {
        let client = client_with_nodes(nodes);
        group.throughput(Throughput::Elements(nodes));

        for (name, key) in [("ed25519", &ed25519), ("ecdsa", &ecdsa)] {
            group.bench_with_input(BenchmarkId::new(name, nodes), &client, |b, client| {
                b.iter_batched(
                    || {
                        let mut transaction = transfer();
                        transaction.freeze_with(client).unwrap();
                        transaction
                    },
                    |mut transaction| {
                        transaction.sign(key.clone()).unwrap();
                        black_box(transaction.to_bytes().unwrap())
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

fn bench_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/bytes");
    let client = client_with_nodes(7);

    let mut transaction = transfer();
    transaction.sign_with_operator(&client).unwrap();
    let bytes = transaction.to_bytes().unwrap();
    group.throughput(Throughput::Bytes(bytes.len() as u64));

    group.bench_function("to_bytes", |b| b.iter(|| black_box(transaction.to_bytes().unwrap())));
    group.bench_function("from_bytes", |b| {
        b.iter(|| black_box(TransferTransaction::from_bytes(black_box(&bytes)).unwrap()))
    });

    group.finish();
}

fn bench_chunks(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/chunks");
    let client = client_with_nodes(3);

    for size in [4 * 1024usize, 64 * 1024] {
        let contents: Vec<u8> = (0..=255u8).cycle().take(size).collect();
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &contents, |b, contents| {
            b.iter(|| {
                let mut append = FileAppendTransaction::new();
                append
                    .file_id(FileId::new(0, 0, 150))
                    .unwrap()
                    .contents(contents.clone())
                    .unwrap()
                    .chunk_size(NonZeroUsize::new(1024).unwrap())
                    .unwrap()
                    .max_chunks(64)
                    .unwrap()
                    .sign_with_operator(&client)
                    .unwrap();
                black_box(append.to_bytes().unwrap())
            });
        });
    }

    group.finish();
}

fn bench_checksum(c: &mut Criterion) {
    let mut group = c.benchmark_group("entity_id/checksum");
    let ledger_id = LedgerId::testnet();

    group.bench_function("compute", |b| {
        b.iter(|| black_box(checksum::compute(black_box(&ledger_id), 0, 0, black_box(1_234_567))))
    });

    group.bench_function("parse_with_checksum", |b| {
        b.iter(|| black_box("0.0.123-esxsf".parse::<AccountId>().unwrap()))
    });

    group.finish();
}

criterion_group!(
    name = pipeline_benches;
    config = Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(5));
    targets = bench_freeze, bench_sign, bench_bytes, bench_chunks, bench_checksum
);

criterion_main!(pipeline_benches);

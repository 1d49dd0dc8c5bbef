//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check lookup accounting, invalidation scope and
//! concurrent access across the cache domains.

use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

use crate::cache::{bulk_key, PasswordCache};
use crate::models::{PasswordGenerationRequest, PasswordRecord};
use crate::password::Complexity;

// == Strategies ==
fn complexity_strategy() -> impl Strategy<Value = Complexity> {
    prop_oneof![
        Just(Complexity::Digits),
        Just(Complexity::Alphanumeric),
        Just(Complexity::Symbols),
    ]
}

fn owner_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,11}".prop_map(|s| s)
}

fn record_strategy() -> impl Strategy<Value = PasswordRecord> {
    (1i64..50, owner_strategy()).prop_map(|(id, owner)| {
        let mut record = PasswordRecord::new(format!("$argon2id$fake${}", id), owner);
        record.id = Some(id);
        record
    })
}

/// A sequence of cache operations for testing
#[derive(Debug, Clone)]
enum CacheOp {
    PutGenerated { length: usize, complexity: Complexity, value: String },
    GetGenerated { length: usize, complexity: Complexity },
    PutById { record: PasswordRecord },
    GetById { id: i64 },
    PutAll { records: Vec<PasswordRecord> },
    GetAll,
    Clear,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (4usize..=30, complexity_strategy(), "[0-9a-zA-Z]{4,30}").prop_map(
            |(length, complexity, value)| CacheOp::PutGenerated {
                length,
                complexity,
                value
            }
        ),
        (4usize..=30, complexity_strategy())
            .prop_map(|(length, complexity)| CacheOp::GetGenerated { length, complexity }),
        record_strategy().prop_map(|record| CacheOp::PutById { record }),
        (1i64..50).prop_map(|id| CacheOp::GetById { id }),
        prop::collection::vec(record_strategy(), 0..5).prop_map(|records| CacheOp::PutAll { records }),
        Just(CacheOp::GetAll),
        Just(CacheOp::Clear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any sequence of operations, the cache answers every lookup exactly as
    // a plain model of the five domains would, and the statistics count each
    // hit, miss and invalidation.
    #[test]
    fn prop_cache_matches_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let cache = PasswordCache::new();
        let mut generated: HashMap<(usize, Complexity), String> = HashMap::new();
        let mut by_id: HashMap<i64, PasswordRecord> = HashMap::new();
        let mut all: Option<Vec<PasswordRecord>> = None;
        let (mut hits, mut misses, mut invalidations) = (0u64, 0u64, 0u64);

        for op in ops {
            match op {
                CacheOp::PutGenerated { length, complexity, value } => {
                    cache.put_generated_password(length, complexity, value.clone());
                    generated.insert((length, complexity), value);
                }
                CacheOp::GetGenerated { length, complexity } => {
                    let got = cache.get_generated_password(length, complexity);
                    let expected = generated.get(&(length, complexity)).cloned();
                    if expected.is_some() { hits += 1 } else { misses += 1 }
                    prop_assert_eq!(got, expected);
                }
                CacheOp::PutById { record } => {
                    let id = record.id.unwrap();
                    cache.put_password_by_id(id, record.clone());
                    by_id.insert(id, record);
                }
                CacheOp::GetById { id } => {
                    let got = cache.get_password_by_id(id);
                    let expected = by_id.get(&id).cloned();
                    if expected.is_some() { hits += 1 } else { misses += 1 }
                    prop_assert_eq!(got, expected);
                }
                CacheOp::PutAll { records } => {
                    cache.put_all_passwords(records.clone());
                    all = Some(records);
                }
                CacheOp::GetAll => {
                    let got = cache.get_all_passwords();
                    if all.is_some() { hits += 1 } else { misses += 1 }
                    prop_assert_eq!(got, all.clone());
                }
                CacheOp::Clear => {
                    cache.clear_database_cache();
                    by_id.clear();
                    all = None;
                    invalidations += 1;
                }
            }
        }

        let stats = cache.stats();
        prop_assert_eq!(stats.hits, hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, misses, "Misses mismatch");
        prop_assert_eq!(stats.invalidations, invalidations, "Invalidations mismatch");
        prop_assert_eq!(stats.generated_entries, generated.len());
        prop_assert_eq!(stats.by_id_entries, by_id.len());
    }

    // A bulk batch stored under its derived key is returned unchanged, and
    // persistence invalidation never touches it.
    #[test]
    fn prop_bulk_batch_survives_invalidation(
        requests in prop::collection::vec(
            (4i64..=30, 1i64..=3, owner_strategy())
                .prop_map(|(l, c, o)| PasswordGenerationRequest::new(l, c, o)),
            1..10
        ),
        passwords in prop::collection::vec("[0-9a-zA-Z]{4,30}", 1..10)
    ) {
        let cache = PasswordCache::new();
        let key = bulk_key(&requests);

        cache.put_bulk_passwords(key.clone(), passwords.clone());
        cache.clear_database_cache();

        prop_assert_eq!(cache.get_bulk_passwords(&key), Some(passwords));
    }
}

// == Property Test for Error Response Format ==
proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    // Every error variant renders as JSON with an "error" string field.
    #[test]
    fn prop_error_response_format(error_msg in "[a-zA-Z0-9 _-]{1,100}") {
        use crate::error::AppError;
        use axum::body::to_bytes;
        use axum::response::IntoResponse;

        let error_variants = vec![
            AppError::Validation(error_msg.clone()),
            AppError::NotFound(error_msg.clone()),
            AppError::Persistence(error_msg.clone()),
            AppError::Hashing(error_msg.clone()),
            AppError::Internal(error_msg.clone()),
        ];

        let rt = tokio::runtime::Runtime::new().unwrap();
        for error in error_variants {
            let response = error.into_response();

            let content_type = response.headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok());
            prop_assert!(
                content_type.map(|ct| ct.contains("application/json")).unwrap_or(false),
                "Response should have JSON content-type"
            );

            let bytes = rt.block_on(async {
                to_bytes(response.into_body(), usize::MAX).await.unwrap()
            });
            let json: serde_json::Value = serde_json::from_slice(&bytes)
                .expect("Response body should be valid JSON");

            prop_assert_eq!(json["error"].as_str(), Some(error_msg.as_str()));
        }
    }
}

// == Property Test for Concurrent Access ==
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    // Concurrent writers into the generated-password domain never lose an
    // update: every distinct key written is present afterwards with a value
    // one of its writers stored.
    #[test]
    fn prop_concurrent_generated_puts(
        writes in prop::collection::vec(
            (4usize..=30, complexity_strategy(), "[0-9]{4,30}"),
            10..80
        )
    ) {
        let cache = Arc::new(PasswordCache::new());

        let handles: Vec<_> = writes
            .chunks(10)
            .map(|chunk| {
                let cache = Arc::clone(&cache);
                let chunk = chunk.to_vec();
                std::thread::spawn(move || {
                    for (length, complexity, value) in chunk {
                        cache.put_generated_password(length, complexity, value);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("writer thread should not panic");
        }

        let mut candidates: HashMap<(usize, Complexity), Vec<String>> = HashMap::new();
        for (length, complexity, value) in &writes {
            candidates.entry((*length, *complexity)).or_default().push(value.clone());
        }

        prop_assert_eq!(cache.stats().generated_entries, candidates.len());
        for ((length, complexity), values) in candidates {
            let got = cache.get_generated_password(length, complexity);
            prop_assert!(got.map(|v| values.contains(&v)).unwrap_or(false));
        }
    }
}

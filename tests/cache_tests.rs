use kvcache::cache::{Cache, STORE_OP};
use kvcache::instrument;
use kvcache::storeclient::{MemoryStore, StoreClient};
use kvcache::Value;

fn fresh_cache() -> Cache<MemoryStore> {
    Cache::new(MemoryStore::new()).expect("flushdb on a memory store cannot fail")
}

#[test]
fn stored_text_round_trips() {
    let mut cache = fresh_cache();
    let key = cache.store(Value::from("hello")).unwrap();
    assert_eq!(cache.get_str(&key).unwrap(), Some("hello".to_string()));
}

#[test]
fn stored_bytes_round_trip() {
    let mut cache = fresh_cache();
    let payload = vec![0u8, 1, 2, 254, 255];
    let key = cache.store(Value::Bytes(payload.clone())).unwrap();
    assert_eq!(cache.get(&key).unwrap(), Some(payload));
}

#[test]
fn stored_int_round_trips() {
    let mut cache = fresh_cache();
    let key = cache.store(Value::Int(-1234)).unwrap();
    assert_eq!(cache.get_int(&key).unwrap(), Some(-1234));
}

#[test]
fn stored_float_round_trips() {
    let mut cache = fresh_cache();
    let key = cache.store(Value::Float(2.75)).unwrap();
    assert_eq!(cache.get_float(&key).unwrap(), Some(2.75));
}

#[test]
fn get_on_missing_key_is_none() {
    let mut cache = fresh_cache();
    assert_eq!(cache.get("no-such-key").unwrap(), None);
    assert_eq!(cache.get_str("no-such-key").unwrap(), None);
    assert_eq!(cache.get_int("no-such-key").unwrap(), None);
}

#[test]
fn get_int_on_text_value_is_an_error() {
    let mut cache = fresh_cache();
    let key = cache.store(Value::from("not a number")).unwrap();
    assert!(cache.get_int(&key).is_err());
}

#[test]
fn get_with_applies_the_transform() {
    let mut cache = fresh_cache();
    let key = cache.store(Value::from("abc")).unwrap();
    let len = cache.get_with(&key, |raw| Ok(raw.len())).unwrap();
    assert_eq!(len, Some(3));
}

#[test]
fn each_store_gets_a_distinct_key() {
    let mut cache = fresh_cache();
    let a = cache.store(Value::Int(1)).unwrap();
    let b = cache.store(Value::Int(1)).unwrap();
    assert_ne!(a, b);
}

#[test]
fn store_is_counted_per_call() {
    let mut cache = fresh_cache();
    for i in 0..5 {
        cache.store(Value::Int(i)).unwrap();
    }
    assert_eq!(instrument::call_count(cache.client_mut(), STORE_OP).unwrap(), 5);
}

#[test]
fn counter_is_zero_before_any_call() {
    let mut cache = fresh_cache();
    assert_eq!(instrument::call_count(cache.client_mut(), STORE_OP).unwrap(), 0);
}

#[test]
fn history_logs_every_call_in_order() {
    let mut cache = fresh_cache();
    let first = cache.store(Value::from("first")).unwrap();
    let second = cache.store(Value::from("second")).unwrap();

    let entries = instrument::history(cache.client_mut(), STORE_OP).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].input, "first");
    assert_eq!(entries[0].output, first);
    assert_eq!(entries[1].input, "second");
    assert_eq!(entries[1].output, second);
}

#[test]
fn input_and_output_logs_grow_together() {
    let mut cache = fresh_cache();
    for i in 0..4 {
        cache.store(Value::Int(i)).unwrap();
    }
    let client = cache.client_mut();
    let inputs = client.list(&instrument::inputs_key(STORE_OP)).unwrap();
    let outputs = client.list(&instrument::outputs_key(STORE_OP)).unwrap();
    assert_eq!(inputs.len(), 4);
    assert_eq!(outputs.len(), 4);
}

#[test]
fn new_cache_flushes_the_database() {
    let mut store = MemoryStore::new();
    store.set("stale", b"data").unwrap();

    let mut cache = Cache::new(store).unwrap();
    assert_eq!(cache.get("stale").unwrap(), None);
}

#[test]
fn open_leaves_existing_data_alone() {
    let mut store = MemoryStore::new();
    store.set("kept", b"data").unwrap();

    let mut cache = Cache::open(store);
    assert_eq!(cache.get("kept").unwrap(), Some(b"data".to_vec()));
}

#[test]
fn replay_reports_the_store_calls() {
    let mut cache = fresh_cache();
    let key = cache.store(Value::from("payload")).unwrap();

    let transcript = instrument::replay(cache.client_mut(), STORE_OP).unwrap();
    assert!(transcript.starts_with("Cache.store was called 1 times:"));
    assert!(transcript.contains(&format!("Cache.store(payload) -> {}", key)));
}

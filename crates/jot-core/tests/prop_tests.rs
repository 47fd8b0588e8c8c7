//! Property tests: the containers against their std counterparts, and the
//! parser against serde_json on generated documents.

use std::collections::HashMap;

use proptest::prelude::*;

use jot_core::{parse, Array, Map, Value};

#[derive(Debug, Clone)]
enum ArrayOp {
    Push(i64),
    Pop,
    Clear,
    Resize(usize, i64),
}

fn array_op() -> impl Strategy<Value = ArrayOp> {
    prop_oneof![
        4 => any::<i64>().prop_map(ArrayOp::Push),
        2 => Just(ArrayOp::Pop),
        1 => Just(ArrayOp::Clear),
        1 => (0usize..32, any::<i64>()).prop_map(|(n, fill)| ArrayOp::Resize(n, fill)),
    ]
}

proptest! {
    #[test]
    fn array_behaves_like_vec(ops in proptest::collection::vec(array_op(), 0..64)) {
        let mut ours: Array<i64> = Array::new();
        let mut theirs: Vec<i64> = Vec::new();

        for op in ops {
            match op {
                ArrayOp::Push(v) => {
                    ours.push(v);
                    theirs.push(v);
                }
                ArrayOp::Pop => {
                    prop_assert_eq!(ours.pop(), theirs.pop());
                }
                ArrayOp::Clear => {
                    ours.clear();
                    theirs.clear();
                }
                ArrayOp::Resize(n, fill) => {
                    ours.resize(n, fill);
                    theirs.resize(n, fill);
                }
            }

            prop_assert_eq!(ours.len(), theirs.len());
            prop_assert_eq!(ours.as_slice(), theirs.as_slice());
        }
    }
}

#[derive(Debug, Clone)]
enum MapOp {
    Insert(usize, i64),
    Assign(usize, i64),
    Remove(usize),
    Lookup(usize),
}

/// Keys come from a small pool so operations collide often.
fn map_op() -> impl Strategy<Value = MapOp> {
    let key = 0usize..16;
    prop_oneof![
        3 => (key.clone(), any::<i64>()).prop_map(|(k, v)| MapOp::Insert(k, v)),
        3 => (key.clone(), any::<i64>()).prop_map(|(k, v)| MapOp::Assign(k, v)),
        2 => key.clone().prop_map(MapOp::Remove),
        2 => key.prop_map(MapOp::Lookup),
    ]
}

fn key_name(index: usize) -> String {
    format!("key-{index}")
}

proptest! {
    #[test]
    fn map_behaves_like_hash_map(ops in proptest::collection::vec(map_op(), 0..128)) {
        let mut ours: Map<i64> = Map::new();
        let mut theirs: HashMap<String, i64> = HashMap::new();

        for op in ops {
            match op {
                MapOp::Insert(k, v) => {
                    let key = key_name(k);
                    let (_, inserted) = ours.insert(&key, v);
                    let was_vacant = !theirs.contains_key(&key);
                    theirs.entry(key).or_insert(v);
                    prop_assert_eq!(inserted, was_vacant);
                }
                MapOp::Assign(k, v) => {
                    let key = key_name(k);
                    let (_, inserted) = ours.insert_or_assign(&key, v);
                    prop_assert_eq!(inserted, theirs.insert(key, v).is_none());
                }
                MapOp::Remove(k) => {
                    let key = key_name(k);
                    prop_assert_eq!(ours.remove(&key), theirs.remove(&key).is_some());
                }
                MapOp::Lookup(k) => {
                    let key = key_name(k);
                    prop_assert_eq!(ours.at(&key).copied(), theirs.get(&key).copied());
                }
            }

            prop_assert_eq!(ours.len(), theirs.len());
        }

        for (key, value) in theirs.iter() {
            prop_assert_eq!(ours.at(key).copied(), Some(*value));
        }
        for (key, value) in ours.iter() {
            prop_assert_eq!(theirs.get(key), Some(value));
        }
    }

    #[test]
    fn map_iteration_matches_contents(
        entries in proptest::collection::hash_map("[a-z]{1,8}", any::<i64>(), 0..64)
    ) {
        let mut map: Map<i64> = Map::new();
        for (key, value) in entries.iter() {
            map.insert(key, *value);
        }

        prop_assert_eq!(map.len(), entries.len());
        let mut visited = 0usize;
        for (key, value) in map.iter() {
            prop_assert_eq!(entries.get(key), Some(value));
            visited += 1;
        }
        prop_assert_eq!(visited, entries.len());
    }
}

/// A document in the grammar subset shared with serde_json: unsigned integer
/// numbers, escape-free strings.
fn subset_json() -> impl Strategy<Value = String> {
    let scalar = prop_oneof![
        Just("null".to_owned()),
        Just("true".to_owned()),
        Just("false".to_owned()),
        (0u64..1_000_000).prop_map(|n| n.to_string()),
        "[a-zA-Z0-9 ]{0,12}".prop_map(|s| format!("\"{s}\"")),
    ];

    scalar.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..6)
                .prop_map(|items| format!("[{}]", items.join(","))),
            proptest::collection::btree_map("[a-z]{1,6}", inner, 0..6).prop_map(|entries| {
                let body: Vec<String> = entries
                    .into_iter()
                    .map(|(key, value)| format!("\"{key}\":{value}"))
                    .collect();
                format!("{{{}}}", body.join(","))
            }),
        ]
    })
}

fn to_serde(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Number(number) => {
            serde_json::Value::Number(serde_json::Number::from(*number as u64))
        }
        Value::Boolean(boolean) => serde_json::Value::Bool(*boolean),
        Value::String(string) => serde_json::Value::String(string.clone()),
        Value::Array(array) => serde_json::Value::Array(array.iter().map(to_serde).collect()),
        Value::Object(object) => serde_json::Value::Object(
            object
                .iter()
                .map(|(key, value)| (key.to_owned(), to_serde(value)))
                .collect(),
        ),
    }
}

proptest! {
    #[test]
    fn parser_agrees_with_serde_json(source in subset_json()) {
        let ours = parse(&source).unwrap();
        let theirs: serde_json::Value = serde_json::from_str(&source).unwrap();
        prop_assert_eq!(to_serde(&ours), theirs);
    }

    #[test]
    fn parse_never_panics(source in "\\PC{0,64}") {
        let _ = parse(&source);
    }
}

// crates/shared-kernel/tests/serde_roundtrip.rs
use lazyq_shared_kernel::{Mean, SortOrder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Wrapper {
    order: SortOrder,
    mean: Mean,
}

#[test]
fn json_roundtrip() {
    let original = Wrapper {
        order: SortOrder::Descending,
        mean: Mean::new().with(4).with(6),
    };
    let json = serde_json::to_string(&original).expect("serializes");
    let decoded: Wrapper = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
    assert_eq!(decoded.mean.value(), Some(5.0));
}

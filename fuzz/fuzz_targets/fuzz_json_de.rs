#![no_main]

use jsarray::{DynArray, Value};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(arr) = serde_json::from_slice::<DynArray<Value>>(data) {
        let text = serde_json::to_string(&arr).expect("arrays always serialize");
        let back: DynArray<Value> = serde_json::from_str(&text).expect("output is valid JSON");
        assert_eq!(back.len(), arr.len());
    }
});

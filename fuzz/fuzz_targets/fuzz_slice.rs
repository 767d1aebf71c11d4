#![no_main]

use arbitrary::Arbitrary;
use jsarray::{DynArray, LAST_ELEMENT};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Push(u8),
    Pop,
    Unshift(u8),
    Shift,
    Slice(i8, i8),
    SliceToEnd(i8),
    Reverse,
}

fn resolve(len: usize, index: i64) -> i64 {
    if index == LAST_ELEMENT {
        len as i64 - 1
    } else if index < 0 {
        len as i64 + index
    } else {
        index
    }
}

fn model_slice(model: &[u8], start: i64, end: i64) -> Option<Vec<u8>> {
    let len = model.len();
    let start = resolve(len, start);
    let end = resolve(len, end).max(start);
    if start < 0 || end as usize > len {
        return None;
    }
    Some(model[start as usize..end as usize].to_vec())
}

fuzz_target!(|ops: Vec<Op>| {
    let mut arr = DynArray::new();
    let mut model: Vec<u8> = Vec::new();

    for op in ops {
        match op {
            Op::Push(v) => {
                arr.push(v);
                model.push(v);
            }
            Op::Pop => assert_eq!(arr.pop().ok(), model.pop()),
            Op::Unshift(v) => {
                arr.unshift(v);
                model.insert(0, v);
            }
            Op::Shift => {
                let expected = if model.is_empty() {
                    None
                } else {
                    Some(model.remove(0))
                };
                assert_eq!(arr.shift().ok(), expected);
            }
            Op::Slice(start, end) => {
                let (start, end) = (i64::from(start), i64::from(end));
                let expected = model_slice(&model, start, end);
                assert_eq!(arr.slice(start, end).is_ok(), expected.is_some());
                if let Some(expected) = expected {
                    model = expected;
                }
            }
            Op::SliceToEnd(start) => {
                let start = i64::from(start);
                let expected = model_slice(&model, start, LAST_ELEMENT);
                let copy = arr.slice_copy(start, LAST_ELEMENT).ok();
                assert_eq!(copy.map(Vec::from), expected);
            }
            Op::Reverse => {
                arr.reverse();
                model.reverse();
            }
        }
        assert_eq!(arr.as_slice(), model.as_slice());
    }
});

#![no_main]

use jsarray::DynArray;
use libfuzzer_sys::fuzz_target;
use rand::{rngs::StdRng, SeedableRng};

fuzz_target!(|input: (u64, Vec<i16>)| {
    let (seed, mut expected) = input;
    let mut arr: DynArray<i16> = expected.clone().into();

    arr.sort_with_rng(&mut StdRng::seed_from_u64(seed), Ord::cmp);
    expected.sort_unstable();
    assert_eq!(arr.as_slice(), expected.as_slice());
});

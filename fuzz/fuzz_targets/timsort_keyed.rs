#![no_main]

use libfuzzer_sys::fuzz_target;

#[path = "../src/util.rs"]
mod util;

// Few distinct keys, so stability is actually exercised.
fuzz_target!(|data: &[u8]| {
    let mut v = util::u8_as_u32(data)
        .into_iter()
        .enumerate()
        .map(|(i, x)| (x % 16, i))
        .collect::<Vec<_>>();

    timsort::sort_by_key(&mut v, |&(key, _)| key);

    // Keys ascend, and equal keys keep their input order.
    assert!(v.windows(2).all(|w| w[0] < w[1]));
});

#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use prnglab_core::{
    AdditiveCongruential, ConstantMultiplier, GeneratorParams, LinearCongruential, MiddleProduct,
    MiddleSquare, MultiplicativeCongruential, Options, WindowPolicy,
};

fn word(data: &[u8], at: usize) -> u32 {
    let mut buf = [0u8; 4];
    for (i, b) in buf.iter_mut().enumerate() {
        *b = data.get(at + i).copied().unwrap_or(0);
    }
    u32::from_le_bytes(buf)
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let opts = Options {
        max_outputs: 4096,
        window_policy: if data[1] & 1 == 0 {
            WindowPolicy::Reject
        } else {
            WindowPolicy::ZeroPad
        },
    };
    let a = word(data, 2);
    let b = word(data, 6);
    let small = i64::from(data.get(10).copied().unwrap_or(0) % 16);
    let count = u64::from(data.get(11).copied().unwrap_or(0));

    let params: GeneratorParams = match data[0] % 6 {
        0 => MiddleSquare::new(a, count).into(),
        1 => MiddleProduct::new(a, b, count).into(),
        2 => LinearCongruential::new(
            i64::from(a as i32),
            small,
            i64::from(b % 64),
            i64::from(b as i32),
        )
        .into(),
        3 => MultiplicativeCongruential::new(i64::from(a as i32), small, i64::from(b % 64)).into(),
        4 => {
            let values = data.get(12..).unwrap_or_default().iter().map(|&v| BigUint::from(v)).collect();
            AdditiveCongruential::new(values, a % 1000, count).into()
        }
        _ => ConstantMultiplier::new(a, b, count).into(),
    };

    // Either a complete sequence or an error, never a panic.
    if let Ok(sequence) = params.generate(&opts) {
        assert!(sequence.len() as u64 <= opts.max_outputs);
        for number in &sequence {
            assert!(number.seed <= *sequence.normalizer());
            assert!(number.random.is_finite());
        }
    }
});

#![no_main]

use libfuzzer_sys::fuzz_target;
use wordstat_math::{div_round_half_up, max_with_ties};

fn read_u64(bytes: &[u8]) -> u64 {
    let mut arr = [0u8; 8];
    let len = bytes.len().min(8);
    arr[..len].copy_from_slice(&bytes[..len]);
    u64::from_le_bytes(arr)
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let scale = u32::from(data[0] % 20);
    let numer = read_u64(data.get(1..9).unwrap_or(&[]));
    let denom = read_u64(data.get(9..17).unwrap_or(&[]));

    match div_round_half_up(numer, denom, scale) {
        None => assert_eq!(denom, 0),
        Some(avg) => {
            // Rounded value is within half a unit of the exact quotient.
            let exact = u128::from(numer) * 10u128.pow(avg.scale());
            let lo = avg.units().saturating_sub(1) * u128::from(denom);
            let hi = (avg.units() + 1) * u128::from(denom);
            assert!(exact >= lo && exact <= hi);

            let rendered = avg.to_string();
            let reparsed: wordstat_math::FixedDecimal = rendered.parse().unwrap();
            assert_eq!(reparsed, avg);
        }
    }

    let entries = data.get(17..).unwrap_or(&[]).chunks(2).enumerate().map(|(i, c)| (i, c[0]));
    let (best, keys) = max_with_ties(entries);
    if data.len() > 17 {
        assert!(!keys.is_empty());
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
        for k in keys {
            assert_eq!(data[17 + k * 2], best);
        }
    }
});

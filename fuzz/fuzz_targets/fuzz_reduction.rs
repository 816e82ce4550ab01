#![no_main]

use libfuzzer_sys::fuzz_target;

use numpar_core::{compute_pi_parallel, compute_pi_sequential};

fuzz_target!(|data: &[u8]| {
    if data.len() < 5 {
        return;
    }
    // n capped at 100k for speed; threads may be zero or negative
    let n = i64::from(u32::from_le_bytes([data[0], data[1], data[2], data[3]]) % 100_000);
    let threads = i64::from(data[4] as i8);

    match (compute_pi_parallel(n, threads), compute_pi_sequential(n)) {
        (Ok(p), Ok(s)) => {
            assert!(((p - s) / s).abs() < 1e-10, "n={n} H={threads}: {p} vs {s}");
        }
        (Err(_), Err(_)) => assert!(n <= 0),
        (p, s) => panic!("parallel and sequential disagree on validity: {p:?} vs {s:?}"),
    }
});

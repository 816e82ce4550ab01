#![no_main]

use libfuzzer_sys::fuzz_target;

use numpar_core::partition::partition;

fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }
    // First 8 bytes are n, next 2 the worker count (capped so the Vec stays small)
    let n = u64::from_le_bytes(data[..8].try_into().unwrap());
    let workers = usize::from(u16::from_le_bytes([data[8], data[9]])) % 4096 + 1;

    let ranges = partition(n, workers);
    assert_eq!(ranges.len(), workers);
    assert_eq!(ranges[0].start, 0);
    assert_eq!(ranges[workers - 1].end, n);

    let mut min = u64::MAX;
    let mut max = 0;
    for pair in ranges.windows(2) {
        assert_eq!(pair[0].end, pair[1].start, "gap or overlap for n={n} H={workers}");
    }
    for r in &ranges {
        min = min.min(r.len());
        max = max.max(r.len());
    }
    assert!(max - min <= 1, "unbalanced partition for n={n} H={workers}");
});

use super::*;

fn fill_with_index(threading: &ConvolveThreading, len: usize) -> (Vec<usize>, usize) {
    let mut out = vec![usize::MAX; len];
    let threads = for_each_texel_range(&mut out, threading, |range, chunk| {
        assert_eq!(range.len(), chunk.len());
        for (slot, index) in chunk.iter_mut().zip(range) {
            assert_eq!(*slot, usize::MAX, "index {index} written twice");
            *slot = index;
        }
    })
    .unwrap();
    (out, threads)
}

#[test]
fn zero_threads_is_a_config_error() {
    let threading = ConvolveThreading {
        threads: Some(0),
        chunk_size: 16,
    };
    let err = threading.validate().unwrap_err();
    assert!(matches!(err, GgxError::Config(_)));

    let mut out = vec![0u8; 4];
    assert!(for_each_texel_range(&mut out, &threading, |_, _| {}).is_err());
}

#[test]
fn serial_run_covers_every_index_once() {
    let threading = ConvolveThreading {
        threads: Some(1),
        chunk_size: 7,
    };
    assert!(threading.is_serial());
    let (out, threads) = fill_with_index(&threading, 100);
    assert_eq!(threads, 1);
    assert!(out.iter().enumerate().all(|(i, &v)| i == v));
}

#[test]
fn parallel_run_covers_every_index_once() {
    let threading = ConvolveThreading {
        threads: Some(3),
        chunk_size: 5,
    };
    let (out, threads) = fill_with_index(&threading, 1001);
    assert_eq!(threads, 3);
    assert!(out.iter().enumerate().all(|(i, &v)| i == v));
}

#[test]
fn zero_chunk_size_is_normalized() {
    let threading = ConvolveThreading {
        threads: Some(2),
        chunk_size: 0,
    };
    assert_eq!(normalized_chunk_size(0), 1);
    let (out, _) = fill_with_index(&threading, 33);
    assert!(out.iter().enumerate().all(|(i, &v)| i == v));
}

#[test]
fn empty_output_is_fine() {
    let (out, _) = fill_with_index(&ConvolveThreading::default(), 0);
    assert!(out.is_empty());
}

#[test]
fn defaults_use_all_cores() {
    let threading = ConvolveThreading::default();
    assert_eq!(threading.threads, None);
    assert_eq!(threading.chunk_size, 256);
    assert!(!threading.is_serial());
    assert!(threading.validate().is_ok());
}

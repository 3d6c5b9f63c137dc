use std::ops::Range;

use rayon::prelude::*;

use crate::foundation::error::{GgxError, GgxResult};

/// How output texels are spread across worker threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvolveThreading {
    /// Worker count; `None` uses every available core and `Some(1)` runs on the calling thread.
    pub threads: Option<usize>,
    /// Output texels per task. `0` is treated as `1`.
    pub chunk_size: usize,
}

impl Default for ConvolveThreading {
    fn default() -> Self {
        Self {
            threads: None,
            chunk_size: 256,
        }
    }
}

impl ConvolveThreading {
    /// Reject settings that cannot be run.
    pub fn validate(&self) -> GgxResult<()> {
        if let Some(n) = self.threads
            && n == 0
        {
            return Err(GgxError::config("thread count must be >= 1 when set"));
        }
        Ok(())
    }

    /// Whether work runs on the calling thread without a pool.
    pub fn is_serial(&self) -> bool {
        self.threads == Some(1)
    }
}

/// Call `f` once per disjoint chunk of `out`, passing the chunk's index range into `out`.
///
/// Every element of `out` is covered by exactly one call. Chunks run in no particular order,
/// on a dedicated pool unless `threading` is serial. Returns the number of worker threads used.
#[tracing::instrument(skip(out, f), fields(len = out.len()))]
pub fn for_each_texel_range<T, F>(
    out: &mut [T],
    threading: &ConvolveThreading,
    f: F,
) -> GgxResult<usize>
where
    T: Send,
    F: Fn(Range<usize>, &mut [T]) + Sync,
{
    threading.validate()?;
    let chunk_size = normalized_chunk_size(threading.chunk_size);

    if threading.is_serial() {
        for (i, chunk) in out.chunks_mut(chunk_size).enumerate() {
            let start = i * chunk_size;
            f(start..start + chunk.len(), chunk);
        }
        return Ok(1);
    }

    let pool = build_thread_pool(threading.threads)?;
    pool.install(|| {
        out.par_chunks_mut(chunk_size)
            .enumerate()
            .for_each(|(i, chunk)| {
                let start = i * chunk_size;
                f(start..start + chunk.len(), chunk);
            });
    });
    Ok(pool.current_num_threads())
}

fn build_thread_pool(threads: Option<usize>) -> GgxResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| GgxError::config(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> usize {
    if chunk_size == 0 { 1 } else { chunk_size }
}

#[cfg(test)]
#[path = "../../tests/unit/convolve/driver.rs"]
mod tests;

use rayon::prelude::*;
use thiserror::Error;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),

    /// The row stride must be valid.
    #[error("row stride must be > 0")]
    InvalidRowStride(usize),
}

/// Controls how parallel operations are executed.
///
/// Every strategy produces bit-identical results; they only differ in how
/// the work is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool to process rows in parallel.
    #[default]
    ParallelRows,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small planes, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    /// Use this primarily for benchmarking or specific isolation needs.
    Fixed(usize),
}

impl ExecutionStrategy {
    /// Whether independent work items may run concurrently.
    pub fn is_parallel(&self) -> bool {
        !matches!(self, ExecutionStrategy::Serial)
    }

    /// Run `op` inside the thread pool selected by the strategy.
    ///
    /// `Fixed(n)` builds a local pool with `n` threads; other strategies run
    /// `op` on the calling thread, where Rayon falls back to the global pool.
    pub fn install<R, F>(&self, op: F) -> Result<R, ParallelError>
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        match *self {
            ExecutionStrategy::Fixed(n) => {
                if n == 0 {
                    return Err(ParallelError::InvalidThreadCount(n));
                }
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| ParallelError::BuildError(e.to_string()))?;
                Ok(pool.install(op))
            }
            _ => Ok(op()),
        }
    }
}

/// Apply a function to each row of `dst` together with its row index.
///
/// # Arguments
///
/// * `dst` - The row-major destination buffer.
/// * `cols` - The number of elements per row.
/// * `strategy` - The execution strategy.
/// * `f` - The function receiving the row index and the mutable row.
///
/// # Errors
///
/// Fails before touching `dst` if `cols` is zero or the strategy is invalid.
pub fn par_iter_rows_indexed<T, F>(
    dst: &mut [T],
    cols: usize,
    strategy: ExecutionStrategy,
    f: F,
) -> Result<(), ParallelError>
where
    T: Send,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    if cols == 0 {
        return Err(ParallelError::InvalidRowStride(cols));
    }

    match strategy {
        ExecutionStrategy::Serial => {
            dst.chunks_exact_mut(cols)
                .enumerate()
                .for_each(|(r, dst_row)| f(r, dst_row));
        }
        ExecutionStrategy::ParallelRows | ExecutionStrategy::Fixed(_) => {
            strategy.install(|| {
                dst.par_chunks_exact_mut(cols)
                    .enumerate()
                    .for_each(|(r, dst_row)| f(r, dst_row));
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_rows(strategy: ExecutionStrategy) -> Result<Vec<usize>, ParallelError> {
        let mut dst = vec![0usize; 12];
        par_iter_rows_indexed(&mut dst, 4, strategy, |r, row| {
            row.iter_mut().enumerate().for_each(|(c, v)| *v = r * 10 + c);
        })?;
        Ok(dst)
    }

    #[test]
    fn test_rows_serial() -> Result<(), ParallelError> {
        assert_eq!(
            fill_rows(ExecutionStrategy::Serial)?,
            vec![0, 1, 2, 3, 10, 11, 12, 13, 20, 21, 22, 23]
        );
        Ok(())
    }

    #[test]
    fn test_rows_strategies_agree() -> Result<(), ParallelError> {
        let serial = fill_rows(ExecutionStrategy::Serial)?;
        assert_eq!(fill_rows(ExecutionStrategy::ParallelRows)?, serial);
        assert_eq!(fill_rows(ExecutionStrategy::Fixed(2))?, serial);
        Ok(())
    }

    #[test]
    fn test_rows_invalid_stride() {
        let mut dst = vec![0u8; 4];
        let res = par_iter_rows_indexed(&mut dst, 0, ExecutionStrategy::Serial, |_, _| {});
        assert_eq!(res, Err(ParallelError::InvalidRowStride(0)));
    }

    #[test]
    fn test_fixed_error() {
        let mut dst = vec![0u8; 4];
        let res = par_iter_rows_indexed(&mut dst, 2, ExecutionStrategy::Fixed(0), |_, row| {
            row.fill(1)
        });
        assert_eq!(res, Err(ParallelError::InvalidThreadCount(0)));
        assert_eq!(dst, vec![0u8; 4]);
    }

    #[test]
    fn test_install() -> Result<(), ParallelError> {
        assert_eq!(ExecutionStrategy::Serial.install(|| 1 + 1)?, 2);
        assert_eq!(
            ExecutionStrategy::Fixed(3).install(rayon::current_num_threads)?,
            3
        );
        assert!(ExecutionStrategy::ParallelRows.is_parallel());
        assert!(!ExecutionStrategy::Serial.is_parallel());
        Ok(())
    }
}

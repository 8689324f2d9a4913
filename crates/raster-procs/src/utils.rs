//! Row partitioning helpers shared by the parallel operators
//!
//! Rows are split into contiguous bands, one band per worker, with the
//! worker count taken from the available hardware concurrency. Band
//! assignment is deterministic arithmetic on the row index, so results
//! never depend on scheduling; the only synchronization is the join
//! barrier at the end of the scope.

#[cfg(feature = "threads")]
pub(crate) fn worker_count(rows: usize) -> usize {
    std::thread::available_parallelism()
        .map_or(1, std::num::NonZeroUsize::get)
        .min(rows)
        .max(1)
}

/// Run `row_op(y, row)` over every `stride`-sized row of `data`.
///
/// `data.len()` must be a multiple of `stride`. Each worker owns a
/// disjoint band of rows, so no locking is needed.
pub(crate) fn for_each_row_mut<T, F>(data: &mut [T], stride: usize, row_op: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync
{
    debug_assert_eq!(data.len() % stride, 0);

    #[cfg(feature = "threads")]
    {
        let rows = data.len() / stride;
        let band = rows.div_ceil(worker_count(rows));

        std::thread::scope(|s| {
            for (index, chunk) in data.chunks_mut(band * stride).enumerate() {
                let row_op = &row_op;

                s.spawn(move || {
                    for (offset, row) in chunk.chunks_mut(stride).enumerate() {
                        row_op(index * band + offset, row);
                    }
                });
            }
        });
    }
    #[cfg(not(feature = "threads"))]
    {
        for (y, row) in data.chunks_mut(stride).enumerate() {
            row_op(y, row);
        }
    }
}

/// Fold rows into one private accumulator per band, returned in band
/// order for the caller to merge.
pub(crate) fn fold_rows<R, F>(
    data: &[u8], stride: usize, make: impl Fn() -> R + Sync, fold: F
) -> Vec<R>
where
    R: Send,
    F: Fn(&mut R, usize, &[u8]) + Sync
{
    debug_assert_eq!(data.len() % stride, 0);

    #[cfg(feature = "threads")]
    {
        let rows = data.len() / stride;
        let band = rows.div_ceil(worker_count(rows));

        std::thread::scope(|s| {
            let mut handles = vec![];

            for (index, chunk) in data.chunks(band * stride).enumerate() {
                let make = &make;
                let fold = &fold;

                handles.push(s.spawn(move || {
                    let mut accumulator = make();
                    for (offset, row) in chunk.chunks(stride).enumerate() {
                        fold(&mut accumulator, index * band + offset, row);
                    }
                    accumulator
                }));
            }
            handles.into_iter().map(|x| x.join().unwrap()).collect()
        })
    }
    #[cfg(not(feature = "threads"))]
    {
        let mut accumulator = make();
        for (y, row) in data.chunks(stride).enumerate() {
            fold(&mut accumulator, y, row);
        }
        vec![accumulator]
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::{fold_rows, for_each_row_mut};

    #[test]
    fn rows_visited_once_with_correct_index() {
        let (stride, rows) = (7, 129);
        let mut data = vec![0_u8; stride * rows];

        for_each_row_mut(&mut data, stride, |y, row| {
            for value in row.iter_mut() {
                *value += (y % 251) as u8;
            }
        });

        for (y, row) in data.chunks_exact(stride).enumerate() {
            assert!(row.iter().all(|value| usize::from(*value) == y % 251));
        }
    }

    #[test]
    fn fold_preserves_totals_across_bands() {
        let (stride, rows) = (5, 64);
        let data = vec![1_u8; stride * rows];

        let partials = fold_rows(
            &data,
            stride,
            || 0_usize,
            |acc, _, row| *acc += row.iter().map(|x| usize::from(*x)).sum::<usize>()
        );

        assert_eq!(partials.iter().sum::<usize>(), stride * rows);
    }
}

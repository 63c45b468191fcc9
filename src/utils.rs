mod counter;

pub use counter::Counter;

/// Index of the first maximum. A later element only replaces the running best
/// when it is strictly greater, so ties resolve to the earliest position.
pub fn argmax<T: PartialOrd>(values: &[T]) -> Option<usize> {
    let mut iter = values.iter().enumerate();
    let (mut result, mut max) = iter.next()?;
    for (i, v) in iter {
        if v > max {
            max = v;
            result = i;
        }
    }
    Some(result)
}

pub fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

use crate::runner::{SortContext, StepKind};

/// Top-down merge sort.
///
/// Splits at `(left + right) / 2`, recurses on both halves and merges through
/// an auxiliary buffer that is written back one element (and one step) at a
/// time. When cancelled during write-back the array is left partially merged.
pub fn merge_sort(ctx: &mut SortContext<'_>) {
    let n = ctx.len();
    if n < 2 {
        return;
    }
    sort_range(ctx, 0, n - 1);
}

fn sort_range(ctx: &mut SortContext<'_>, left: usize, right: usize) {
    if left >= right || ctx.is_cancelled() {
        return;
    }
    let mid = left + (right - left) / 2;
    sort_range(ctx, left, mid);
    sort_range(ctx, mid + 1, right);
    merge(ctx, left, mid, right);
}

fn merge(ctx: &mut SortContext<'_>, left: usize, mid: usize, right: usize) {
    if ctx.is_cancelled() {
        return;
    }

    let run = ctx.read_range(left..=right);
    let (left_run, right_run) = run.split_at(mid - left + 1);
    let order = ctx.order();
    let mut comparisons = 0u64;
    let merged = merge_runs(left_run, right_run, |a, b| {
        comparisons += 1;
        order.keeps_left(*a, *b)
    });
    ctx.record_comparisons(comparisons);

    for (offset, value) in merged.into_iter().enumerate() {
        if ctx.is_cancelled() {
            return;
        }
        let index = left + offset;
        ctx.write(index, value);
        ctx.step(StepKind::Write { index, value });
    }
}

/// Merges two runs that are already ordered under `keeps_left`.
///
/// `keeps_left(l, r)` decides whether the left head goes first; it should
/// return true on ties so that equal elements keep left-run precedence.
pub fn merge_runs<T: Copy>(
    left: &[T],
    right: &[T],
    mut keeps_left: impl FnMut(&T, &T) -> bool,
) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if keeps_left(&left[i], &right[j]) {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

#[cfg(test)]
mod tests {
    use super::merge_runs;
    use crate::algorithms::test_support::{sort, sort_cancelled_after};
    use crate::order::{Algorithm, SortOrder};
    use crate::runner::StepKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_descending_example() {
        let (output, _, _) = sort(&[9, 1, 8, 2], SortOrder::Descending, Algorithm::Merge);
        assert_eq!(output, vec![9, 8, 2, 1]);
    }

    #[test]
    fn test_ties_prefer_left_run() {
        let left = [(5, 'a'), (5, 'b')];
        let right = [(5, 'c')];
        let merged = merge_runs(&left, &right, |l, r| SortOrder::Descending.keeps_left(l.0, r.0));
        assert_eq!(merged, vec![(5, 'a'), (5, 'b'), (5, 'c')]);

        let merged = merge_runs(&right, &left, |l, r| SortOrder::Ascending.keeps_left(l.0, r.0));
        assert_eq!(merged, vec![(5, 'c'), (5, 'a'), (5, 'b')]);
    }

    #[test]
    fn test_merge_runs_appends_remainders() {
        let merged = merge_runs(&[1, 4], &[2, 3, 9, 10], |l, r| {
            SortOrder::Ascending.keeps_left(*l, *r)
        });
        assert_eq!(merged, vec![1, 2, 3, 4, 9, 10]);
        assert_eq!(merge_runs::<i32>(&[], &[], |_, _| true), Vec::<i32>::new());
    }

    #[test]
    fn test_one_step_per_write_back() {
        let (_, stats, steps) = sort(&[9, 1, 8, 2], SortOrder::Descending, Algorithm::Merge);
        // Two merges of 2 plus one merge of 4
        assert_eq!(stats.writes, 8);
        assert_eq!(stats.steps, 8);
        assert!(steps.iter().all(|s| matches!(s.kind, StepKind::Write { .. })));
        assert_eq!(steps.last().unwrap().kind, StepKind::Write { index: 3, value: 1 });
    }

    #[test]
    fn test_sorted_input_is_unchanged() {
        let input = [10, 8, 8, 3, -2];
        let (output, _, steps) = sort(&input, SortOrder::Descending, Algorithm::Merge);
        assert_eq!(output, input.to_vec());
        // Every write-back rewrites the value already there
        let mut replay = input.to_vec();
        for step in steps {
            if let StepKind::Write { index, value } = step.kind {
                assert_eq!(replay[index], value);
                replay[index] = value;
            }
        }
    }

    #[test]
    fn test_cancel_during_write_back_leaves_partial_merge() {
        // Both halves are merged after four steps; the final merge of
        // [1, 5] and [3, 4] is cut off after writing 1 and 3.
        let (output, stats, interrupted) =
            sort_cancelled_after(&[5, 1, 4, 3], SortOrder::Ascending, Algorithm::Merge, 6);
        assert_eq!(output, vec![1, 3, 3, 4]);
        assert_eq!(stats.steps, 6);
        assert_eq!(stats.writes, 6);
        assert!(interrupted);

        let (output, stats, interrupted) =
            sort_cancelled_after(&[5, 1, 4, 3], SortOrder::Descending, Algorithm::Merge, 6);
        assert_eq!(output, vec![5, 4, 4, 3]);
        assert_eq!(stats.steps, 6);
        assert!(interrupted);
    }
}

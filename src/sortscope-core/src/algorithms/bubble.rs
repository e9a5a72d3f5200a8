use crate::runner::{SortContext, StepKind};

/// Bubble sort: `n - 1` passes of adjacent comparisons over a shrinking prefix.
///
/// Emits one step after every comparison, swapped or not.
pub fn bubble_sort(ctx: &mut SortContext<'_>) {
    let n = ctx.len();
    if n < 2 {
        return;
    }

    for pass in 0..n - 1 {
        if ctx.is_cancelled() {
            return;
        }
        for j in 0..n - pass - 1 {
            if ctx.is_cancelled() {
                return;
            }
            let (left, right) = (ctx.get(j), ctx.get(j + 1));
            let swapped = ctx.precedes(right, left);
            if swapped {
                ctx.swap(j, j + 1);
            }
            ctx.step(StepKind::Compare {
                left: j,
                right: j + 1,
                swapped,
            });
        }
    }
}

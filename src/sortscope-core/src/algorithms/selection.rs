use crate::runner::{SortContext, StepKind};

/// Selection sort: move the extreme element of the unsorted suffix into place.
///
/// Emits one step per outer iteration. A scan cut short by cancellation does
/// not swap.
pub fn selection_sort(ctx: &mut SortContext<'_>) {
    let n = ctx.len();
    if n < 2 {
        return;
    }

    for i in 0..n - 1 {
        if ctx.is_cancelled() {
            return;
        }

        let mut extreme = i;
        let mut extreme_value = ctx.get(i);
        for j in i + 1..n {
            if ctx.is_cancelled() {
                return;
            }
            let value = ctx.get(j);
            if ctx.precedes(value, extreme_value) {
                extreme = j;
                extreme_value = value;
            }
        }

        if extreme != i {
            ctx.swap(i, extreme);
        }
        ctx.step(StepKind::Place {
            target: i,
            source: extreme,
        });
    }
}

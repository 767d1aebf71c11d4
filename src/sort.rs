//! Randomized quicksort used by [`DynArray::sort`]
//!
//! The pivot of every partition is picked uniformly at random, which keeps the
//! expected running time at O(n log n) for any input order. The sort is not
//! stable: elements that compare `Equal` may come out in any order, and that
//! order can differ between runs unless the random source is seeded.

use std::cmp::Ordering;

use rand::Rng;

use crate::array::DynArray;

impl<T> DynArray<T> {
    /// Sorts the array in place with `compare`, using the thread-local random
    /// number generator to pick pivots.
    ///
    /// `compare(a, b)` returning `Less` places `a` before `b` and `Greater`
    /// places `b` before `a`. The sort is not stable: elements that compare
    /// `Equal` may end up in any order.
    pub fn sort<F>(&mut self, compare: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_with_rng(&mut rand::thread_rng(), compare)
    }

    /// Like [`DynArray::sort`], but draws pivots from `rng`. Passing a seeded
    /// generator makes the resulting order of equal elements reproducible.
    pub fn sort_with_rng<R, F>(&mut self, rng: &mut R, mut compare: F) -> &mut Self
    where
        R: Rng,
        F: FnMut(&T, &T) -> Ordering,
    {
        tracing::trace!(len = self.len(), "sorting");
        quicksort(self.as_mut_slice(), &mut compare, rng);
        self
    }
}

fn quicksort<T, F, R>(mut items: &mut [T], compare: &mut F, rng: &mut R)
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng,
{
    while items.len() >= 2 {
        let pivot = partition(items, compare, rng);
        let (left, right) = std::mem::take(&mut items).split_at_mut(pivot);
        let right = &mut right[1..];
        // Recurse into the smaller side so the stack stays O(log n)
        if left.len() < right.len() {
            quicksort(left, compare, rng);
            items = right;
        } else {
            quicksort(right, compare, rng);
            items = left;
        }
    }
}

// Returns the final position of the pivot. Everything before it compared
// `Less` than the pivot; nothing after it did.
fn partition<T, F, R>(items: &mut [T], compare: &mut F, rng: &mut R) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng,
{
    let last = items.len() - 1;
    items.swap(rng.gen_range(0..items.len()), last);

    let mut store = 0;
    for i in 0..last {
        if compare(&items[i], &items[last]) == Ordering::Less {
            items.swap(i, store);
            store += 1;
        }
    }
    items.swap(store, last);
    store
}

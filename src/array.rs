//! Functionality relating to the dynamic array type

use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FromIterator;
use std::ops::{Index, IndexMut, Range};
use std::slice::SliceIndex;

use crate::error::ArrayError;

/// Slice bound meaning "the last valid index" (`len - 1`).
///
/// Because it resolves to the last index rather than the length, using it as
/// an exclusive `end` leaves out the final element:
/// `dyn_array![1, 2, 3].slice_copy(0, LAST_ELEMENT)` is `[1, 2]`.
pub const LAST_ELEMENT: i64 = i64::MIN;

/// Returned by the index searches when nothing matches.
pub const NOT_FOUND: i64 = -1;

// Negative offsets count from the end; `LAST_ELEMENT` is the last index.
pub(crate) fn resolve_index(len: usize, index: i64) -> i64 {
    if index == LAST_ELEMENT {
        len as i64 - 1
    } else if index < 0 {
        len as i64 + index
    } else {
        index
    }
}

/// The `DynArray` type is an ordered, growable sequence with the API of a
/// scripting-language array: elements are pushed, popped, shifted and
/// unshifted; bounds may be negative to count from the end; traversal
/// callbacks see the element, its index and the whole array.
///
/// Elements can be any `T`. Operations that need to compare elements require
/// `T: PartialEq`, joining requires `T: Display`, and operations that hand out
/// copies of elements require `T: Clone`. Use `DynArray<Value>` to mix element
/// types within one array.
///
/// `DynArray` does no internal locking: sharing one between threads is only
/// possible through the usual `Send`/`Sync` rules for `T`, and concurrent
/// mutation must be synchronised by the caller.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DynArray<T> {
    items: Vec<T>,
}

impl<T> DynArray<T> {
    /// Constructs a new empty `DynArray`. Does not allocate.
    #[must_use]
    pub fn new() -> Self {
        DynArray { items: Vec::new() }
    }

    /// Constructs a new `DynArray` with the specified capacity. At least that many items
    /// can be added to the array without reallocating.
    #[must_use]
    pub fn with_capacity(cap: usize) -> Self {
        DynArray {
            items: Vec::with_capacity(cap),
        }
    }

    /// Constructs a `DynArray` holding the given elements in order.
    ///
    /// See also the [`dyn_array!`](crate::dyn_array) and
    /// [`values!`](crate::values) macros.
    pub fn of<I: IntoIterator<Item = T>>(items: I) -> Self {
        items.into_iter().collect()
    }

    /// Constructs a `DynArray` of `n` absent-value placeholders (`T::default()`).
    /// A negative `n` yields an empty array.
    #[must_use]
    pub fn of_length(n: i64) -> Self
    where
        T: Default,
    {
        let n = usize::try_from(n).unwrap_or(0);
        std::iter::repeat_with(T::default).take(n).collect()
    }

    /// Returns the capacity of the array.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Returns the number of elements in the array.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the array is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrows a slice of the array's elements.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Borrows a mutable slice of the array's elements.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Returns an iterator over the array's elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns a mutable iterator over the array's elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Gets a reference to the element at the given index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Gets a mutable reference to the element at the given index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Gets the element at `index`, where a negative index counts back from
    /// the end and [`LAST_ELEMENT`] is the last element.
    pub fn at(&self, index: i64) -> Result<&T, ArrayError> {
        let len = self.len();
        let resolved = resolve_index(len, index);
        usize::try_from(resolved)
            .ok()
            .and_then(|i| self.items.get(i))
            .ok_or_else(|| {
                tracing::debug!(index, resolved, len, "element access out of bounds");
                ArrayError::OutOfBounds {
                    index: resolved,
                    len,
                }
            })
    }

    /// Removes all elements from the array.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Pushes a new item onto the back of the array.
    pub fn push(&mut self, item: T) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Pushes every item onto the back of the array, preserving their order.
    pub fn push_many<I: IntoIterator<Item = T>>(&mut self, items: I) -> &mut Self {
        self.items.extend(items);
        self
    }

    /// Inserts a new item at the front of the array.
    ///
    /// Each call goes in front of everything already there, so unshifting
    /// `1`, `2` and `3` one at a time leaves `[3, 2, 1]`.
    pub fn unshift(&mut self, item: T) -> &mut Self {
        self.items.insert(0, item);
        self
    }

    /// Inserts the items at the front of the array, keeping them in the order
    /// given: unshifting `[1, 2, 3]` onto `[4]` leaves `[1, 2, 3, 4]`.
    pub fn unshift_many<I: IntoIterator<Item = T>>(&mut self, items: I) -> &mut Self {
        let tail = std::mem::replace(&mut self.items, items.into_iter().collect());
        self.items.extend(tail);
        self
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Result<T, ArrayError> {
        self.items
            .pop()
            .ok_or(ArrayError::OutOfBounds { index: -1, len: 0 })
    }

    /// Removes and returns the first element.
    pub fn shift(&mut self) -> Result<T, ArrayError> {
        if self.items.is_empty() {
            Err(ArrayError::OutOfBounds { index: 0, len: 0 })
        } else {
            Ok(self.items.remove(0))
        }
    }

    /// Reverses the order of the elements in place.
    pub fn reverse(&mut self) -> &mut Self {
        self.items.reverse();
        self
    }

    /// Overwrites every element with `value`. The length does not change.
    pub fn fill(&mut self, value: T) -> &mut Self
    where
        T: Clone,
    {
        self.items.fill(value);
        self
    }

    fn slice_range(&self, start: i64, end: i64) -> Result<Range<usize>, ArrayError> {
        let len = self.len();
        let start = resolve_index(len, start);
        let end = resolve_index(len, end).max(start);
        let to_usize = |index: i64| {
            usize::try_from(index)
                .ok()
                .filter(|&i| i <= len)
                .ok_or_else(|| {
                    tracing::debug!(index, len, "slice bound out of bounds");
                    ArrayError::OutOfBounds { index, len }
                })
        };
        Ok(to_usize(start)?..to_usize(end)?)
    }

    /// Narrows the array in place to the half-open range `[start, end)`.
    ///
    /// A negative bound counts back from the end and [`LAST_ELEMENT`] resolves
    /// to `len - 1`. If `end` resolves below `start` the result is empty.
    /// Bounds that still fall outside the array are an
    /// [`ArrayError::OutOfBounds`], and leave the array untouched.
    pub fn slice(&mut self, start: i64, end: i64) -> Result<&mut Self, ArrayError> {
        let range = self.slice_range(start, end)?;
        self.items.truncate(range.end);
        self.items.drain(..range.start);
        Ok(self)
    }

    /// Like [`DynArray::slice`], but returns the range as a new array and
    /// leaves this one unchanged.
    pub fn slice_copy(&self, start: i64, end: i64) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        let range = self.slice_range(start, end)?;
        Ok(self.items[range].to_vec().into())
    }

    /// Returns a new array holding this array's elements followed by `other`'s.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        self.iter().chain(other.iter()).cloned().collect()
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        DynArray {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for DynArray<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.items.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for DynArray<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.items.as_mut_slice(), index)
    }
}

impl<T: Debug> Debug for DynArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.items, f)
    }
}

/// Renders the elements separated by commas, like [`DynArray::join`] with the
/// default separator.
impl<T: Display> Display for DynArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            Display::fmt(item, f)?;
        }
        Ok(())
    }
}

impl<T> From<Vec<T>> for DynArray<T> {
    fn from(items: Vec<T>) -> Self {
        DynArray { items }
    }
}

impl<T, const N: usize> From<[T; N]> for DynArray<T> {
    fn from(items: [T; N]) -> Self {
        DynArray {
            items: Vec::from(items),
        }
    }
}

impl<T> From<DynArray<T>> for Vec<T> {
    fn from(array: DynArray<T>) -> Self {
        array.items
    }
}

impl<T> AsRef<[T]> for DynArray<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[mockalloc::test]
    fn can_create() {
        let x = DynArray::<Value>::new();
        let y = DynArray::<Value>::with_capacity(10);

        assert_eq!(x, y);
        assert!(y.capacity() >= 10);
    }

    #[mockalloc::test]
    fn can_create_with_placeholders() {
        let x = DynArray::<Value>::of_length(5);
        assert_eq!(x.len(), 5);
        assert!(x.iter().all(Value::is_null));

        assert!(DynArray::<Value>::of_length(-5).is_empty());
        assert!(DynArray::<Option<i32>>::of_length(0).is_empty());
    }

    #[mockalloc::test]
    fn can_collect() {
        let x = vec![Value::NULL, Value::TRUE, Value::FALSE];
        let y: DynArray<Value> = x.iter().cloned().collect();

        assert_eq!(y.as_slice(), x.as_slice());
    }

    #[mockalloc::test]
    fn can_push_unshift() {
        let mut x = DynArray::new();
        x.push(2).push(3).unshift(1);
        assert_eq!(x.as_slice(), &[1, 2, 3]);

        x.push_many([4, 5]).unshift_many([-1, 0]);
        assert_eq!(x.as_slice(), &[-1, 0, 1, 2, 3, 4, 5]);
    }

    #[mockalloc::test]
    fn can_pop_shift() {
        let mut x: DynArray<Value> = vec![Value::NULL, Value::TRUE, Value::FALSE].into();
        assert_eq!(x.shift(), Ok(Value::NULL));
        assert_eq!(x.pop(), Ok(Value::FALSE));
        assert_eq!(x.as_slice(), &[Value::TRUE]);

        assert_eq!(x.pop(), Ok(Value::TRUE));
        assert_eq!(x.pop(), Err(ArrayError::OutOfBounds { index: -1, len: 0 }));
        assert_eq!(x.shift(), Err(ArrayError::OutOfBounds { index: 0, len: 0 }));
    }

    #[mockalloc::test]
    fn can_nest() {
        let x: DynArray<Value> = vec![Value::NULL, Value::TRUE, Value::FALSE].into();
        let y: DynArray<Value> = vec![
            Value::NULL,
            x.clone().into(),
            Value::FALSE,
            x.clone().into(),
        ]
        .into();

        assert_eq!(y[1].as_array(), Some(&x));
    }

    #[mockalloc::test]
    fn can_index() {
        let mut x: DynArray<Value> = vec![Value::NULL, Value::TRUE, Value::FALSE].into();
        assert_eq!(x[1], Value::TRUE);
        x[1] = Value::FALSE;
        assert_eq!(x[1], Value::FALSE);
        assert_eq!(&x[1..], &[Value::FALSE, Value::FALSE]);
    }

    #[mockalloc::test]
    fn can_slice_in_place() {
        let mut x: DynArray<i32> = (1..=7).collect();
        x.slice(1, -1).unwrap();
        assert_eq!(x.as_slice(), &[2, 3, 4, 5, 6]);
        x.slice(-2, LAST_ELEMENT).unwrap();
        assert_eq!(x.as_slice(), &[5]);
        x.slice(1, 0).unwrap();
        assert!(x.is_empty());
    }

    #[mockalloc::test]
    fn can_slice_copy() {
        let x: DynArray<i32> = (1..=7).collect();
        assert_eq!(x.slice_copy(0, 2).unwrap().as_slice(), &[1, 2]);
        assert_eq!(x.slice_copy(2, 4).unwrap().as_slice(), &[3, 4]);
        assert_eq!(x.slice_copy(0, -2).unwrap().as_slice(), &[1, 2, 3, 4, 5]);
        assert_eq!(x.slice_copy(-4, -2).unwrap().as_slice(), &[4, 5]);
        assert_eq!(
            x.slice_copy(0, LAST_ELEMENT).unwrap().as_slice(),
            &[1, 2, 3, 4, 5, 6]
        );
        assert_eq!(x.slice_copy(5, 2).unwrap().len(), 0);
        assert_eq!(x.len(), 7);
    }

    #[mockalloc::test]
    fn can_get_by_position() {
        let mut x: DynArray<Value> = vec![Value::NULL, Value::TRUE].into();
        assert_eq!(x.get(1), Some(&Value::TRUE));
        assert_eq!(x.get(2), None);

        if let Some(v) = x.get_mut(0) {
            *v = Value::FALSE;
        }
        assert_eq!(x.as_slice(), &[Value::FALSE, Value::TRUE]);
        assert!(x.get_mut(2).is_none());
    }

    #[mockalloc::test]
    fn can_fill_and_reverse() {
        let original: DynArray<i32> = vec![1, 2, 3, 4].into();
        let mut x = original.clone();
        x.reverse().reverse();
        assert_eq!(x, original);

        let mut x: DynArray<i32> = vec![1, 2, 3].into();
        x.reverse();
        assert_eq!(x.as_slice(), &[3, 2, 1]);
        x.fill(9);
        assert_eq!(x.as_slice(), &[9, 9, 9]);
    }

    #[mockalloc::test]
    fn can_concat() {
        let x: DynArray<i32> = vec![1, 2].into();
        let y: DynArray<i32> = vec![3].into();
        assert_eq!(x.concat(&y).as_slice(), &[1, 2, 3]);
        assert_eq!(x.len(), 2);
    }

    #[test]
    fn rejects_out_of_range_slices() {
        let mut x: DynArray<i32> = vec![1, 2, 3].into();
        assert_eq!(
            x.slice_copy(0, 10),
            Err(ArrayError::OutOfBounds { index: 10, len: 3 })
        );
        assert_eq!(
            x.slice_copy(-5, 1),
            Err(ArrayError::OutOfBounds { index: -2, len: 3 })
        );
        assert!(x.slice(4, 4).is_err());
        assert_eq!(x.as_slice(), &[1, 2, 3]);

        let empty = DynArray::<i32>::new();
        assert_eq!(empty.slice_copy(0, LAST_ELEMENT), Ok(DynArray::new()));
        assert_eq!(
            empty.slice_copy(LAST_ELEMENT, LAST_ELEMENT),
            Err(ArrayError::OutOfBounds { index: -1, len: 0 })
        );
    }

    #[test]
    fn can_access_from_either_end() {
        let x: DynArray<i32> = vec![1, 2, 3].into();
        assert_eq!(x.at(0), Ok(&1));
        assert_eq!(x.at(-1), Ok(&3));
        assert_eq!(x.at(LAST_ELEMENT), Ok(&3));
        assert_eq!(x.at(3), Err(ArrayError::OutOfBounds { index: 3, len: 3 }));
        assert_eq!(x.at(-4), Err(ArrayError::OutOfBounds { index: -1, len: 3 }));
    }

    #[test]
    fn displays_comma_separated() {
        let x: DynArray<i32> = vec![1, 2, 3].into();
        assert_eq!(x.to_string(), "1,2,3");
        assert_eq!(format!("{:?}", x), "[1, 2, 3]");
        assert_eq!(DynArray::<i32>::new().to_string(), "");
    }

    // Too slow for miri
    #[cfg(not(miri))]
    #[mockalloc::test]
    fn stress_test() {
        use rand::prelude::*;

        for i in 0..10 {
            // We want our test to be random but for errors to be reproducible
            let mut rng = StdRng::seed_from_u64(i);
            let mut arr = DynArray::new();
            let mut model = Vec::new();

            for j in 0..1000 {
                match rng.gen_range(0..4) {
                    0 => {
                        arr.push(j);
                        model.push(j);
                    }
                    1 => {
                        arr.unshift(j);
                        model.insert(0, j);
                    }
                    2 => assert_eq!(arr.pop().ok(), model.pop()),
                    _ => {
                        let expected = if model.is_empty() {
                            None
                        } else {
                            Some(model.remove(0))
                        };
                        assert_eq!(arr.shift().ok(), expected);
                    }
                }
            }
            assert_eq!(arr.as_slice(), model.as_slice());
        }
    }
}

//! Higher-order traversal, searching and transformation over a [`DynArray`]
//!
//! Every callback receives `(element, index, array)`, where `array` is the
//! whole receiver, so a predicate can look at the element's neighbours.
//!
//! The searches that take a `from_index` treat a negative `from_index` as
//! "no match" and return straight away without scanning. `find_index` and
//! `index_of` report the position of the match relative to `from_index`.

use std::fmt::Display;

use crate::array::{DynArray, NOT_FOUND};

impl<T> DynArray<T> {
    /// Returns `true` if `predicate` holds for every element. An empty array
    /// returns `true`.
    pub fn every<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        self.iter().enumerate().all(|(i, v)| predicate(v, i, self))
    }

    /// Returns `true` if `predicate` holds for at least one element. An empty
    /// array returns `false`.
    pub fn some<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        self.iter().enumerate().any(|(i, v)| predicate(v, i, self))
    }

    /// Returns the first element satisfying `predicate`.
    pub fn find<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        self.iter()
            .enumerate()
            .find(|&(i, v)| predicate(v, i, self))
            .map(|(_, v)| v)
    }

    /// Returns the offset from `from_index` of the first element at or after
    /// `from_index` satisfying `predicate`, or [`NOT_FOUND`].
    pub fn find_index<F>(&self, mut predicate: F, from_index: i64) -> i64
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        if from_index < 0 {
            return NOT_FOUND;
        }
        let from = usize::try_from(from_index).unwrap_or(usize::MAX);
        self.iter()
            .enumerate()
            .skip(from)
            .find(|&(i, v)| predicate(v, i, self))
            .map_or(NOT_FOUND, |(i, _)| i as i64 - from_index)
    }

    /// Returns `true` if an element at or after `from_index` equals `value`.
    pub fn includes<U>(&self, value: &U, from_index: i64) -> bool
    where
        T: PartialEq<U>,
        U: ?Sized,
    {
        self.index_of(value, from_index) != NOT_FOUND
    }

    /// Returns the offset from `from_index` of the first element at or after
    /// `from_index` equal to `value`, or [`NOT_FOUND`].
    pub fn index_of<U>(&self, value: &U, from_index: i64) -> i64
    where
        T: PartialEq<U>,
        U: ?Sized,
    {
        self.find_index(|v, _, _| v == value, from_index)
    }

    /// Searches backwards, starting `from_index` elements before the end, and
    /// returns the absolute index of the first element equal to `value`, or
    /// [`NOT_FOUND`].
    pub fn last_index_of<U>(&self, value: &U, from_index: i64) -> i64
    where
        T: PartialEq<U>,
        U: ?Sized,
    {
        if from_index < 0 {
            return NOT_FOUND;
        }
        let start = (self.len() as i64 - 1)
            .checked_sub(from_index)
            .and_then(|start| usize::try_from(start).ok());
        match start {
            Some(start) => self.as_slice()[..=start]
                .iter()
                .rposition(|v| v == value)
                .map_or(NOT_FOUND, |i| i as i64),
            None => NOT_FOUND,
        }
    }

    /// Calls `f` on every element in order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T, usize, &Self),
    {
        for (i, v) in self.iter().enumerate() {
            f(v, i, self);
        }
    }

    /// Returns a new array of the elements satisfying `predicate`, in order.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        T: Clone,
        F: FnMut(&T, usize, &Self) -> bool,
    {
        self.iter()
            .enumerate()
            .filter(|&(i, v)| predicate(v, i, self))
            .map(|(_, v)| v.clone())
            .collect()
    }

    /// Returns a new array of `f` applied to each element, in order.
    pub fn map<U, F>(&self, mut f: F) -> DynArray<U>
    where
        F: FnMut(&T, usize, &Self) -> U,
    {
        let mut res = DynArray::with_capacity(self.len());
        for (i, v) in self.iter().enumerate() {
            res.push(f(v, i, self));
        }
        res
    }

    /// Folds the elements from first to last: `acc = f(acc, element, index, array)`.
    pub fn reduce<A, F>(&self, mut f: F, initial: A) -> A
    where
        F: FnMut(A, &T, usize, &Self) -> A,
    {
        self.iter()
            .enumerate()
            .fold(initial, |acc, (i, v)| f(acc, v, i, self))
    }

    /// Folds the elements from last to first.
    pub fn reduce_right<A, F>(&self, mut f: F, initial: A) -> A
    where
        F: FnMut(A, &T, usize, &Self) -> A,
    {
        self.iter()
            .enumerate()
            .rev()
            .fold(initial, |acc, (i, v)| f(acc, v, i, self))
    }

    /// Renders each element with `Display`, separated by `separator`. An empty
    /// separator means `","`.
    #[must_use]
    pub fn join(&self, separator: &str) -> String
    where
        T: Display,
    {
        let separator = if separator.is_empty() { "," } else { separator };
        self.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

#[cfg(test)]
mod tests {
    use crate::{DynArray, Value, NOT_FOUND};

    fn mixed() -> DynArray<Value> {
        vec![Value::from("str1"), Value::from(2), Value::TRUE].into()
    }

    #[mockalloc::test]
    fn every_and_some() {
        let ints: DynArray<i32> = vec![1, 2, 3].into();
        assert!(ints.every(|v, _, _| *v > 0));
        assert!(!ints.every(|v, _, _| *v > 1));
        assert!(ints.some(|v, _, _| *v > 2));
        assert!(!ints.some(|v, _, _| *v > 3));

        let empty = DynArray::<i32>::new();
        assert!(empty.every(|_, _, _| false));
        assert!(!empty.some(|_, _, _| true));

        assert!(!mixed().some(|v, _, _| v.is_null()));
    }

    #[mockalloc::test]
    fn callbacks_see_index_and_array() {
        let ints: DynArray<i32> = vec![1, 2, 3].into();
        assert!(ints.every(|v, i, arr| arr[i] == *v && arr.len() == 3));
        // Strictly increasing
        assert!(ints.every(|v, i, arr| i == 0 || arr[i - 1] < *v));
    }

    #[mockalloc::test]
    fn find_first_match() {
        let ints: DynArray<i32> = vec![1, 2, 3, 2].into();
        assert_eq!(ints.find(|v, _, _| *v == 2), Some(&2));
        assert_eq!(ints.find(|_, i, _| i == 3), Some(&2));
        assert_eq!(ints.find(|v, _, _| *v == 5), None);
        assert_eq!(mixed().find(|v, _, _| v.is_null()), None);
    }

    #[mockalloc::test]
    fn find_index_is_relative_to_from_index() {
        let ints: DynArray<i32> = vec![1, 2, 3].into();
        assert_eq!(ints.find_index(|v, _, _| *v == 2, 0), 1);
        assert_eq!(ints.find_index(|v, _, _| *v == 3, 1), 1);
        assert_eq!(ints.find_index(|v, _, _| *v == 1, 1), NOT_FOUND);
        assert_eq!(ints.find_index(|_, _, _| true, 5), NOT_FOUND);
        assert_eq!(ints.find_index(|_, _, _| true, -1), NOT_FOUND);
    }

    #[mockalloc::test]
    fn negative_from_index_never_scans() {
        let ints: DynArray<i32> = vec![1, 2, 3].into();
        let mut calls = 0;
        ints.find_index(
            |_, _, _| {
                calls += 1;
                true
            },
            -1,
        );
        assert_eq!(calls, 0);
    }

    #[mockalloc::test]
    fn index_of_and_includes() {
        let ints: DynArray<i32> = vec![1, 2, 3].into();
        assert_eq!(ints.index_of(&2, 0), 1);
        assert_eq!(ints.index_of(&2, 1), 0);
        assert_eq!(ints.index_of(&2, 2), NOT_FOUND);
        assert_eq!(ints.index_of(&2, 5), NOT_FOUND);
        assert_eq!(ints.index_of(&2, -5), NOT_FOUND);

        assert!(ints.includes(&2, 0));
        assert!(ints.includes(&2, 1));
        assert!(!ints.includes(&2, 2));
        assert!(!ints.includes(&2, -1));

        let strings = mixed();
        assert_eq!(strings.index_of("str1", 0), 0);
        assert_eq!(strings.index_of(&2, 0), 1);
        assert!(strings.includes(&true, 0));
        assert!(!strings.includes(&Value::NULL, 0));
    }

    #[mockalloc::test]
    fn last_index_of_is_absolute() {
        let ints: DynArray<i32> = vec![1, 2, 3].into();
        assert_eq!(ints.last_index_of(&2, 0), 1);
        assert_eq!(ints.last_index_of(&2, 1), 1);
        assert_eq!(ints.last_index_of(&2, 2), NOT_FOUND);
        assert_eq!(ints.last_index_of(&2, 5), NOT_FOUND);
        assert_eq!(ints.last_index_of(&2, -5), NOT_FOUND);
        assert_eq!(ints.last_index_of(&2, i64::MAX), NOT_FOUND);

        let repeated: DynArray<i32> = vec![2, 1, 2, 1].into();
        assert_eq!(repeated.last_index_of(&2, 0), 2);
        assert_eq!(repeated.last_index_of(&2, 2), 0);
        assert_eq!(DynArray::<i32>::new().last_index_of(&2, 0), NOT_FOUND);
    }

    #[mockalloc::test]
    fn filter_and_map() {
        let ints: DynArray<i32> = vec![1, 2, 3].into();
        assert_eq!(ints.filter(|v, _, _| *v > 2).as_slice(), &[3]);
        assert_eq!(ints.map(|v, _, _| v + 2).as_slice(), &[3, 4, 5]);
        assert_eq!(ints.map(|_, i, _| i).as_slice(), &[0, 1, 2]);

        let strings: DynArray<String> =
            vec!["str1".to_owned(), "str2".to_owned(), "str3".to_owned()].into();
        assert_eq!(
            strings.filter(|v, _, _| v != "str1").as_slice(),
            &["str2".to_owned(), "str3".to_owned()]
        );
        assert_eq!(
            strings.map(|v, _, _| format!("s{}", v)).join(","),
            "sstr1,sstr2,sstr3"
        );

        let only_true = mixed().map(|v, _, _| if *v == true { v.clone() } else { Value::NULL });
        assert_eq!(only_true.as_slice(), &[Value::NULL, Value::NULL, Value::TRUE]);
    }

    #[mockalloc::test]
    fn reduce_in_both_directions() {
        let ints: DynArray<u32> = vec![2, 3].into();
        assert_eq!(ints.reduce(|acc, v, _, _| acc.pow(*v), 2u32), 64);
        assert_eq!(ints.reduce_right(|acc, v, _, _| acc.pow(*v), 2u32), 64);

        let strings: DynArray<&str> = vec!["str1", "str2", "str3"].into();
        assert_eq!(
            strings.reduce(|acc, v, _, _| acc + *v, String::new()),
            "str1str2str3"
        );
        assert_eq!(
            strings.reduce_right(|acc, v, _, _| acc + *v, String::new()),
            "str3str2str1"
        );

        let mut order = Vec::new();
        ints.reduce_right(|_, _, i, _| order.push(i), ());
        assert_eq!(order, vec![1, 0]);

        let sum = mixed().reduce(|acc, v, _, _| acc + v.to_i64().unwrap_or(0), 0i64);
        assert_eq!(sum, 2);
    }

    #[mockalloc::test]
    fn for_each_visits_in_order() {
        let ints: DynArray<i32> = vec![4, 5, 6].into();
        let mut seen = Vec::new();
        ints.for_each(|v, i, _| seen.push((i, *v)));
        assert_eq!(seen, vec![(0, 4), (1, 5), (2, 6)]);
    }

    #[mockalloc::test]
    fn join_with_separators() {
        let ints: DynArray<i32> = vec![1, 2, 3].into();
        assert_eq!(ints.join(""), "1,2,3");
        assert_eq!(ints.join("|"), "1|2|3");
        assert_eq!(ints.join("\""), "1\"2\"3");
        assert_eq!(ints.join(", "), "1, 2, 3");
        assert_eq!(mixed().join(","), "str1,2,true");
        assert_eq!(DynArray::<i32>::new().join(","), "");
    }
}

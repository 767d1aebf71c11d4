/// Creates a [`DynArray`](crate::DynArray), with the same forms as `vec!`.
///
/// ```
/// use jsarray::dyn_array;
///
/// let a = dyn_array![1, 2, 3];
/// let b = dyn_array![0u8; 4];
/// assert_eq!(a.len(), 3);
/// assert_eq!(b.as_slice(), &[0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! dyn_array {
    () => {
        $crate::DynArray::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::DynArray::from(::std::vec![$elem; $n])
    };
    ($($x:expr),+ $(,)?) => {
        $crate::DynArray::from(::std::vec![$($x),+])
    };
}

/// Creates a `DynArray<Value>`, converting each element with
/// [`Value::from`](crate::Value).
///
/// ```
/// use jsarray::{values, Value, ValueType};
///
/// let mixed = values!["str1", 2, true, Value::NULL];
/// assert_eq!(mixed[0].type_of(), ValueType::String);
/// assert!(mixed[3].is_null());
/// ```
#[macro_export]
macro_rules! values {
    () => {
        $crate::DynArray::<$crate::Value>::new()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::DynArray::<$crate::Value>::from(::std::vec![$($crate::Value::from($x)),+])
    };
}

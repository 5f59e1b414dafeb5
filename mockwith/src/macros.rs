/// Create a [`RawEntry`](crate::RawEntry) from a list of values.
///
/// Values are separated by commas. `field = value` sets a named field
/// (`method`, `params`, `result`, `throws` or `invoked`), everything else is
/// a positional value. A bracketed list is a JSON array, `null` is the JSON
/// null, any other value is converted with [`Raw::from`](crate::Raw).
/// Expressions containing top level commas must be wrapped in parentheses.
///
/// ```
/// use mockwith::{entry, Field};
///
/// let entry = entry!["fun", ["foo", 2], result = "bar"];
///
/// assert_eq!(entry.positional().len(), 2);
/// assert!(entry.get(Field::Result).is_some());
/// ```
#[macro_export]
macro_rules! entry {
    ($($tokens:tt)*) => {{
        #[allow(unused_mut)]
        let mut entry = $crate::RawEntry::new();
        $crate::__entry_items!(entry; $($tokens)*);
        entry
    }};
}

/// Create an ordered [`RawBatch`](crate::RawBatch). Every bracketed item is
/// an [`entry!`](crate::entry), every other item is converted with
/// [`RawItem::from`](crate::RawItem).
///
/// ```
/// use mockwith::ordered;
///
/// let batch = ordered![
///     ["a", ["x"], "y"],
///     ["b", ["y"], "z"],
///     ["c", "never"],
/// ];
/// ```
#[macro_export]
macro_rules! ordered {
    ($($item:tt),* $(,)?) => {
        $crate::RawBatch::Ordered(::std::vec![$($crate::__ordered_item!($item)),*])
    };
}

/// Create a name-keyed [`RawBatch`](crate::RawBatch). A bracketed value is
/// the full specification of the method, written like an
/// [`entry!`](crate::entry) without method; any other value is the
/// call-count policy.
///
/// ```
/// use mockwith::named;
///
/// let batch = named! {
///     "a" => [["x"], "y"],
///     "b" => [params = ["y"], result = "z"],
///     "c" => "never",
/// };
/// ```
#[macro_export]
macro_rules! named {
    ($($tokens:tt)*) => {{
        #[allow(unused_mut)]
        let mut batch = $crate::NamedBatch::new();
        $crate::__named_items!(batch; $($tokens)*);
        $crate::RawBatch::Named(batch)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __entry_items {
    ($entry:ident;) => {};
    ($entry:ident; $field:ident = $($rest:tt)*) => {
        $crate::__entry_value!($entry; ($crate::__field!($field)); []; $($rest)*);
    };
    ($entry:ident; $($rest:tt)+) => {
        $crate::__entry_value!($entry; (); []; $($rest)+);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __entry_value {
    ($entry:ident; ($($field:tt)*); [$($value:tt)*]; , $($rest:tt)*) => {
        $crate::__entry_push!($entry; ($($field)*); $($value)*);
        $crate::__entry_items!($entry; $($rest)*);
    };
    ($entry:ident; ($($field:tt)*); [$($value:tt)*];) => {
        $crate::__entry_push!($entry; ($($field)*); $($value)*);
    };
    ($entry:ident; ($($field:tt)*); [$($value:tt)*]; $next:tt $($rest:tt)*) => {
        $crate::__entry_value!($entry; ($($field)*); [$($value)* $next]; $($rest)*);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __entry_push {
    ($entry:ident; (); $($value:tt)+) => {
        $entry.push($crate::__raw!($($value)+));
    };
    ($entry:ident; ($($field:tt)+); $($value:tt)+) => {
        $entry.set($($field)+, $crate::__raw!($($value)+));
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __raw {
    (null) => {
        $crate::Raw::Value($crate::Value::Null)
    };
    ([$($inner:tt)*]) => {
        $crate::Raw::Value($crate::json!([$($inner)*]))
    };
    ($($expr:tt)+) => {
        $crate::Raw::from($($expr)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field {
    (method) => {
        $crate::Field::Method
    };
    (params) => {
        $crate::Field::Params
    };
    (result) => {
        $crate::Field::Result
    };
    (throws) => {
        $crate::Field::Throws
    };
    (invoked) => {
        $crate::Field::Invoked
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __ordered_item {
    ([$($entry:tt)*]) => {
        $crate::RawItem::Entry($crate::entry!($($entry)*))
    };
    ($item:expr) => {
        $crate::RawItem::from($item)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __named_items {
    ($batch:ident;) => {};
    ($batch:ident; $key:expr => [$($spec:tt)*] $(, $($rest:tt)*)?) => {
        $batch.push($key, $crate::NamedSpec::Structured($crate::entry!($($spec)*)));
        $($crate::__named_items!($batch; $($rest)*);)?
    };
    ($batch:ident; $key:expr => $value:expr $(, $($rest:tt)*)?) => {
        $batch.push($key, $crate::NamedSpec::Shorthand($crate::Raw::from($value)));
        $($crate::__named_items!($batch; $($rest)*);)?
    };
}

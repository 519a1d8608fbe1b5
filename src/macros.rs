/// Writes a [`Nested`](crate::builder::Nested) mapping as a literal.
///
/// `nested! { "a" => { "b" => {}, "c" => {} } }` is the mapping with root
/// `"a"` and two leaf children. `nested! {}` is the empty mapping.
#[macro_export]
macro_rules! nested {
    () => {
        $crate::builder::Nested::new()
    };
    ($($id:expr => { $($inner:tt)* }),+ $(,)?) => {{
        let mut mapping = $crate::builder::Nested::new();
        $(
            mapping.insert($id, $crate::nested!($($inner)*));
        )+
        mapping
    }};
}

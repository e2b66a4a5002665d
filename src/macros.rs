/// Builds a [`KeyValues`](crate::KeyValues) tree from a literal layout.
///
/// Groups are written as `"name" { ... }`, values as `"name" => expr` where
/// the expression converts into a [`Value`](crate::Value). Entries keep the
/// order they are written in; commas after groups are optional, commas
/// between values are required.
///
/// ```rust
/// use keyvalues::{keyvalues, SymbolTable};
///
/// let symbols = SymbolTable::new();
/// let kv = keyvalues!(symbols, "Config" {
///     "volume" => 75,
///     "Audio" {
///         "enabled" => true,
///         "device" => "default"
///     }
///     "gain" => 0.5,
/// });
///
/// assert_eq!(kv.get_int("volume", 0), 75);
/// assert!(kv.get_bool("audio/enabled", false));
/// assert_eq!(kv.get_float("gain", 0.0), 0.5);
/// ```
#[macro_export]
macro_rules! keyvalues {
    (@body $node:ident; ) => {};

    (@body $node:ident; $key:literal { $($inner:tt)* } , $($rest:tt)*) => {
        $crate::keyvalues!(@body $node; $key { $($inner)* } $($rest)*);
    };

    (@body $node:ident; $key:literal { $($inner:tt)* } $($rest:tt)*) => {
        {
            #[allow(unused_variables)]
            let child = $node.create_key($key);
            $crate::keyvalues!(@body child; $($inner)*);
        }
        $crate::keyvalues!(@body $node; $($rest)*);
    };

    (@body $node:ident; $key:literal => $value:expr , $($rest:tt)*) => {
        $node.create_key($key).set_value($value);
        $crate::keyvalues!(@body $node; $($rest)*);
    };

    (@body $node:ident; $key:literal => $value:expr) => {
        $node.create_key($key).set_value($value);
    };

    ($symbols:expr, $name:literal { $($body:tt)* }) => {{
        #[allow(unused_mut)]
        let mut root = $crate::KeyValues::new(&$symbols, $name);
        $crate::keyvalues!(@body root; $($body)*);
        root
    }};
}

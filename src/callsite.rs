// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Call-site capture.

[`callsite!`](crate::callsite!) records the file, line and enclosing function of the expression it
appears in.  The logging macros call it for you, only after the level has passed the threshold.
*/

/// Where a log statement was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub function: &'static str,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// The file's last path component.
    pub fn file_name(&self) -> &'static str {
        trim_file_name(self.file)
    }
}

/**
Strips any leading directories from a path.

```
use linewise::trim_file_name;
assert_eq!(trim_file_name("/a/b/c.rs"), "c.rs");
assert_eq!(trim_file_name("c.rs"), "c.rs");
assert_eq!(trim_file_name(""), "");
```

Both `/` and `\` separate components, since `file!()` reports Windows paths with backslashes.
*/
pub fn trim_file_name(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(separator) => &path[separator + 1..],
        None => path,
    }
}

/**
Turns the type name of a marker fn nested in the caller into the caller's path.

`type_name` of a fn item `crate::module::caller::__marker` is its full path; closures show up as
`{{closure}}` segments, which are dropped so a closure reports the function it was written in.
*/
#[doc(hidden)]
pub fn enclosing_function(marker_type_name: &'static str) -> &'static str {
    let mut name = marker_type_name
        .strip_suffix("::__linewise_marker")
        .unwrap_or(marker_type_name);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}

/// Expands to the fully qualified path of the enclosing function, e.g. `my_crate::net::connect`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __linewise_marker() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::hidden::enclosing_function(type_name_of(__linewise_marker))
    }};
}

/// Expands to the [`CallSite`](crate::CallSite) of the expression it appears in.
#[macro_export]
macro_rules! callsite {
    () => {
        $crate::CallSite::new(::core::file!(), ::core::line!(), $crate::function_name!())
    };
}

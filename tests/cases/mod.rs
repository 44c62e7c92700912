// Every case builds a fresh wrapped instance with `build!()`, whose `push`
// appends to the backing sequence.

// Helper macro to generate test functions based on field names
macro_rules! handle_case {
    // Reads of indices 0.. on a fresh instance
    ([$($attrs:meta)*] fresh, [$($expected:expr),* $(,)?]) => {
        $(#[$attrs])*
        #[test]
        fn validate_fresh() {
            let wrapped = build!();
            let expected: &[Option<i64>] = &[$($expected),*];
            for (index, expected) in expected.iter().enumerate() {
                pretty_assertions::assert_eq!(
                    wrapped.get(index).copied(),
                    *expected,
                    "index {}",
                    index
                );
            }
        }
    };

    // Reads of indices 0.. after pushing values
    ([$($attrs:meta)*] pushed, ([$($value:expr),*] => [$($expected:expr),* $(,)?])) => {
        $(#[$attrs])*
        #[test]
        fn validate_pushed() {
            let mut wrapped = build!();
            wrapped.push(&[$($value),*]);
            let expected: &[Option<i64>] = &[$($expected),*];
            for (index, expected) in expected.iter().enumerate() {
                pretty_assertions::assert_eq!(
                    wrapped.get(index).copied(),
                    *expected,
                    "index {}",
                    index
                );
            }
        }
    };

    // Every index in the range reads the same as calling `at`
    ([$($attrs:meta)*] matches_at, ([$($value:expr),*] => $range:expr)) => {
        $(#[$attrs])*
        #[test]
        fn validate_matches_at() {
            let mut wrapped = build!();
            wrapped.push(&[$($value),*]);
            for index in $range {
                pretty_assertions::assert_eq!(wrapped.get(index), wrapped.at(index), "index {}", index);
            }
        }
    };

    // The `name` getter returns the constructor argument
    ([$($attrs:meta)*] name, $expected:expr) => {
        $(#[$attrs])*
        #[test]
        fn validate_name() {
            let wrapped = build!();
            pretty_assertions::assert_eq!(wrapped.name(), $expected);
        }
    };

    // Generic case for unknown field names
    ([$($attrs:meta)*] $field_name:ident, $expected:tt) => {
        compile_error!(concat!("Unknown test case field: ", stringify!($field_name)));
    };
}

// Helper macro to recursively parse assertion fields
macro_rules! parse_assertions {
    // Base case: no more fields to parse
    (@parse [$($test_functions:tt)*]) => {
        $($test_functions)*
    };

    // Parse assertion field with potential attributes
    (@parse [$($test_functions:tt)*] $(#[$attr:meta])* $field_name:ident: $field_value:tt, $($rest:tt)*) => {
        parse_assertions! {@parse [
            $($test_functions)*
            handle_case! {[$($attr)*] $field_name, $field_value}
        ] $($rest)*}
    };
}

// Main macro - name first, build second, then any order for assertions
macro_rules! test_case {
    (
        name: $name:ident,
        build: $build:expr,
        $($assertion_fields:tt)*
    ) => {
        mod $name {
            #![allow(unused_imports, dead_code)]

            use super::*;

            // Make `$build` available to all test functions
            macro_rules! build {
                () => {
                    $build
                };
            }

            // Generate all test functions
            parse_assertions! {@parse [] $($assertion_fields)*}
        }
    };
}

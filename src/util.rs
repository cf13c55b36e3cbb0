/*!

  Utils for testing.

*/

/// Compare rendered reports as strings up to indentation.
/// Both sides must have the same number of lines.
#[macro_export]
macro_rules! assert_report_eq {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left_val, right_val) => {
                assert_eq!(
                    left_val.lines().count(),
                    right_val.lines().count(),
                    "reports differ in length"
                );
                for (left_line, right_line) in left_val.lines().zip(right_val.lines()) {
                    assert_eq!(
                        left_line.trim(),
                        right_line.trim()
                    );
                }
            }
        }
    };
    ($left:expr, $right:expr, $($arg:tt)+) => {
        match (&$left, &$right) {
            (left_val, right_val) => {
                assert_eq!(
                    left_val.lines().count(),
                    right_val.lines().count(),
                    std::format_args!($($arg)+)
                );
                for (left_line, right_line) in left_val.lines().zip(right_val.lines()) {
                    assert_eq!(
                        left_line.trim(),
                        right_line.trim(),
                        std::format_args!($($arg)+)
                    );
                }
            }
        }
    };
}

//! Custom assertion macros for CLI tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

/// Assert that command output contains a substring.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "CREATE");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $needle:expr) => {
        assert!(
            $result.combined_output().contains($needle),
            "Expected output to contain '{}'.\nstdout:\n{}\nstderr:\n{}",
            $needle,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that a project file carries a valid signature.
///
/// # Example
/// ```ignore
/// assert_signed!(env, "gen/Foo.php");
/// ```
#[macro_export]
macro_rules! assert_signed {
    ($env:expr, $path:expr) => {
        let content = $env.read_project_file($path);
        assert!(
            stamped::verify(&content).is_valid(),
            "Expected '{}' to carry a valid signature, got {}.\nContent:\n{}",
            $path,
            stamped::verify(&content),
            content
        );
    };
}

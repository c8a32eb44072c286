//! Textual rendering of call lists.
//!
//! Every call becomes one `<operation-name>(<arguments>);` statement followed
//! by the delimiter.

use std::fmt::Write as _;

use crate::call::Call;

pub const DEFAULT_DELIMITER: &str = "\n";

/// Render `calls` as statements, each followed by `delimiter`.
pub fn render(calls: &[Call], delimiter: &str) -> String {
    let mut out = String::new();
    for call in calls {
        // Writing to a String cannot fail.
        let _ = write!(out, "{};{}", call, delimiter);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::*;

    #[test]
    fn statements_are_terminated() {
        let calls = vec![Call::Enable(GL_DEPTH_TEST), Call::DepthFunc(GL_LESS)];
        assert_eq!(
            render(&calls, DEFAULT_DELIMITER),
            "glEnable(GL_DEPTH_TEST);\nglDepthFunc(GL_LESS);\n"
        );
        assert_eq!(
            render(&calls, " "),
            "glEnable(GL_DEPTH_TEST); glDepthFunc(GL_LESS); "
        );
    }

    #[test]
    fn empty_is_empty() {
        assert_eq!(render(&[], "\n"), "");
    }
}

//! Shell quoting for assignment values.
//!
//! Values are quoted so that `eval`-ing `NAME=<quoted>` in a POSIX shell
//! assigns the original string byte for byte.

use std::borrow::Cow;

/// Quote `value` for the right-hand side of a shell assignment.
///
/// - the empty string renders as nothing (`NAME=`)
/// - strings made only of shell-inert characters are left bare
/// - everything else is single-quoted, with `'` written as `'\''`
///
/// # Examples
///
/// ```ignore
/// assert_eq!(quote_value("submit_gate.sbatch"), "submit_gate.sbatch");
/// assert_eq!(quote_value("two words"), "'two words'");
/// ```
pub fn quote_value(value: &str) -> Cow<'_, str> {
    if value.is_empty() {
        return Cow::Borrowed("");
    }

    match shell_words::quote(value) {
        // shell-words leaves `~` bare, but assignments tilde-expand after `=` and `:`.
        Cow::Borrowed(bare) if bare.contains('~') => Cow::Owned(format!("'{}'", bare)),
        quoted => quoted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parse `NAME=<quoted>` back the way a shell would tokenize it.
    fn unquote_assignment(quoted: &str) -> String {
        let line = format!("X={}", quoted);
        let words = shell_words::split(&line).unwrap();
        assert_eq!(words.len(), 1, "assignment split into several words: {:?}", words);
        words[0].strip_prefix("X=").unwrap().to_string()
    }

    #[test]
    fn empty_value_renders_nothing() {
        assert_eq!(quote_value(""), "");
    }

    #[test]
    fn plain_values_stay_bare() {
        assert_eq!(quote_value("simulation"), "simulation");
        assert_eq!(quote_value("submit_gate.sbatch"), "submit_gate.sbatch");
        assert_eq!(quote_value("1-10"), "1-10");
        assert_eq!(quote_value("a,b,c"), "a,b,c");
    }

    #[test]
    fn special_values_are_quoted() {
        assert_eq!(quote_value("--mem=4G --time=1:00"), "'--mem=4G --time=1:00'");
        assert_eq!(quote_value("$HOME"), "'$HOME'");
    }

    #[test]
    fn tilde_is_always_quoted() {
        assert_eq!(quote_value("~/jobs"), "'~/jobs'");
        assert_eq!(quote_value("a:~b"), "'a:~b'");
    }

    #[test]
    fn quoted_values_split_back_to_original() {
        let samples = [
            "two words",
            "single ' quote",
            "double \" quote",
            "dollar $PATH and ${HOME}",
            "back `tick` $(cmd)",
            "semi; amp & pipe | redirect > out",
            "glob * ? [a]",
            "line one\nline two",
            "tab\tseparated",
            "back\\slash",
            "'''",
            "~user",
        ];
        for sample in samples {
            let quoted = quote_value(sample);
            assert_eq!(unquote_assignment(&quoted), sample, "quoted as {}", quoted);
        }
    }
}

//! Home-directory expansion for user-supplied paths.

/// Expand a leading `~` or `~/` to the current user's home directory.
///
/// Everything else passes through untouched: `~user` forms, a `~`
/// anywhere past the first character, relative paths, and the empty
/// string. The home directory comes from the platform convention
/// (`$HOME` on Unix).
pub fn tilde_expand(path: &str) -> String {
    shellexpand::tilde(path).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> String {
        dirs::home_dir()
            .expect("test environment has a home directory")
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_empty_path_stays_empty() {
        assert_eq!(tilde_expand(""), "");
    }

    #[test]
    fn test_spaces_are_preserved() {
        assert_eq!(tilde_expand("i like spaces"), "i like spaces");
    }

    #[test]
    fn test_expands_bare_tilde() {
        assert_eq!(tilde_expand("~"), home());
    }

    #[test]
    fn test_expands_tilde_as_base_directory() {
        assert_eq!(tilde_expand("~/"), format!("{}/", home()));
        assert_eq!(tilde_expand("~/foo"), format!("{}/foo", home()));
        assert_eq!(tilde_expand("~/spam"), format!("{}/spam", home()));
        assert_ne!(tilde_expand("~/foo"), "~/foo");
    }

    #[test]
    fn test_only_a_leading_tilde_expands() {
        assert_eq!(tilde_expand("/foo/bar~"), "/foo/bar~");
    }

    #[test]
    fn test_named_user_form_does_not_expand() {
        assert_eq!(tilde_expand("~baz/foo"), "~baz/foo");
    }

    #[test]
    fn test_relative_paths_pass_through() {
        assert_eq!(tilde_expand("./foo"), "./foo");
    }
}

//! Config text helpers.

/// Replace `${VAR}` with the environment value of `VAR`.
///
/// Unset variables expand to the empty string, which the scanner treats as
/// a missing credential. An unterminated `${` is kept verbatim.
pub fn expand_env_vars(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };
        if let Ok(value) = std::env::var(&after[..end]) {
            out.push_str(&value);
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::expand_env_vars;

    #[test]
    fn expands_known_and_blanks_unknown() {
        // PATH is set in any test environment.
        let path = std::env::var("PATH").unwrap();
        assert_eq!(expand_env_vars("p=${PATH};"), format!("p={path};"));
        assert_eq!(
            expand_env_vars("k=${WALRUS_WEBSEARCH_SURELY_UNSET}!"),
            "k=!"
        );
    }

    #[test]
    fn unterminated_is_verbatim() {
        assert_eq!(expand_env_vars("a ${OOPS"), "a ${OOPS");
        assert_eq!(expand_env_vars("no vars"), "no vars");
    }
}

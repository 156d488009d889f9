//! Placeholder token substitution for template config files.

/// Token the template carries wherever the domain name belongs.
pub const PLACEHOLDER: &str = "%DOMAIN%";

/// Replace every occurrence of [`PLACEHOLDER`] with `domain`.
///
/// Works on raw bytes, so content in any encoding passes through; bytes outside the
/// token are left untouched.
pub fn substitute(content: &[u8], domain: &str) -> Vec<u8> {
    let token = PLACEHOLDER.as_bytes();
    let mut out = Vec::with_capacity(content.len());
    let mut rest = content;

    while let Some(pos) = rest.windows(token.len()).position(|window| window == token) {
        out.extend_from_slice(&rest[..pos]);
        out.extend_from_slice(domain.as_bytes());
        rest = &rest[pos + token.len()..];
    }
    out.extend_from_slice(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn replaces_every_occurrence() {
        let template = b"ServerName %DOMAIN%\nDocumentRoot /srv/http/%DOMAIN%/htdocs\n";
        assert_eq!(
            substitute(template, "example.org"),
            b"ServerName example.org\nDocumentRoot /srv/http/example.org/htdocs\n"
        );
    }

    #[test]
    fn leaves_partial_tokens_alone() {
        let template = b"%DOMAIN %domain% DOMAIN% %%DOMAIN%%";
        assert_eq!(substitute(template, "a.b"), b"%DOMAIN %domain% DOMAIN% %a.b%");
    }

    #[test]
    fn content_without_token_is_unchanged() {
        let template = b"<VirtualHost *:80>\n</VirtualHost>\n";
        assert_eq!(substitute(template, "example.org"), template);
    }

    #[test]
    fn non_utf8_bytes_pass_through() {
        let template = b"# Caf\xe9 server\nServerName %DOMAIN%\n\xff";
        assert_eq!(
            substitute(template, "example.org"),
            b"# Caf\xe9 server\nServerName example.org\n\xff"
        );
    }

    proptest! {
        #[test]
        fn only_tokens_change(
            chunks in proptest::collection::vec(
                proptest::collection::vec(any::<u8>().prop_filter("no %", |b| *b != b'%'), 0..16),
                1..8,
            ),
            domain in "[a-z0-9.-]{1,24}",
        ) {
            let template = chunks.join(PLACEHOLDER.as_bytes());
            let result = substitute(&template, &domain);

            prop_assert!(!result.windows(PLACEHOLDER.len()).any(|w| w == PLACEHOLDER.as_bytes()));
            prop_assert_eq!(result, chunks.join(domain.as_bytes()));
        }
    }
}

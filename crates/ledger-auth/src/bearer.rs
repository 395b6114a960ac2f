/// Extract the token from an `Authorization: Bearer <token>` header value.
///
/// The scheme is case-sensitive and must be followed by a single space.
/// A blank token counts as no token.
#[must_use]
pub fn parse_bearer(header: Option<&str>) -> Option<&str> {
    header
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

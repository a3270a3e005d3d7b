/// Append `name=value` pairs to an endpoint, starting a query string with `?`
/// when the endpoint has none and continuing it with `&` otherwise.
///
/// Values are inserted verbatim; any escaping is left to the transport.
pub fn build_url<N, V>(endpoint: &str, pairs: &[(N, V)]) -> String
where
    N: AsRef<str>,
    V: AsRef<str>,
{
    let mut url = endpoint.to_string();
    for (name, value) in pairs {
        let separator = if url.contains('?') { '&' } else { '?' };
        url.push(separator);
        url.push_str(name.as_ref());
        url.push('=');
        url.push_str(value.as_ref());
    }
    url
}

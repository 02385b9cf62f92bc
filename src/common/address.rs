/// A node address broken into the components the API root is built from.
///
/// Parsing is total: a missing scheme falls back to `http`, a missing
/// path to `/`. Once constructed the address never changes, so the
/// derived base URL is stable for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeAddress {
    /// URL scheme, without the `://`.
    pub protocol: String,
    /// Host, including the port if there is one.
    pub host: String,
    /// Path as given, always starting with `/`.
    pub path: String,
}

impl NodeAddress {
    pub fn parse(address: &str) -> Self {
        let (protocol, rest) = match address.split_once("://") {
            Some((protocol, rest)) => (protocol, rest),
            None => ("http", address),
        };
        let (host, path) = match rest.split_once('/') {
            Some((host, path)) => (host, format!("/{path}")),
            None => (rest, "/".to_string()),
        };
        Self {
            protocol: protocol.to_string(),
            host: host.to_string(),
            path,
        }
    }

    /// The API root: `protocol + "://" + host + "/" + first path segment`.
    ///
    /// An address without a path segment keeps the trailing slash rather
    /// than being normalized away.
    pub fn base_url(&self) -> String {
        format!("{}://{}/{}", self.protocol, self.host, self.first_path_segment())
    }

    /// First `/`-delimited segment of the path, possibly empty.
    fn first_path_segment(&self) -> &str {
        self.path
            .trim_start_matches('/')
            .split('/')
            .next()
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_keeps_first_path_segment() {
        let address = NodeAddress::parse("https://host.example/app/x");
        assert_eq!(address.protocol, "https");
        assert_eq!(address.host, "host.example");
        assert_eq!(address.path, "/app/x");
        assert_eq!(address.base_url(), "https://host.example/app");
    }

    #[test]
    fn test_base_url_without_path() {
        let address = NodeAddress::parse("http://localhost:5000");
        assert_eq!(address.base_url(), "http://localhost:5000/");
    }

    #[test]
    fn test_base_url_single_segment() {
        let address = NodeAddress::parse("http://grid.local/status");
        assert_eq!(address.base_url(), "http://grid.local/status");
    }

    #[test]
    fn test_missing_scheme_falls_back_to_http() {
        let address = NodeAddress::parse("grid.local/a/b");
        assert_eq!(address.base_url(), "http://grid.local/a");
    }

    #[test]
    fn test_base_url_is_stable() {
        let address = NodeAddress::parse("https://host.example/app/x");
        assert_eq!(address.base_url(), address.base_url());
    }
}

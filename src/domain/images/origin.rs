use url::{Origin, Url};

use crate::domain::errors::{AppError, ConfigResult};

/// Decides whether an image URL may be shown.
pub trait OriginPolicy {
    fn is_allowed(&self, url: &str) -> bool;
}

/// Any `Fn(&str) -> bool` is a policy, handy for injecting a predicate.
impl<F> OriginPolicy for F
where
    F: Fn(&str) -> bool,
{
    fn is_allowed(&self, url: &str) -> bool {
        self(url)
    }
}

/// Host allow-list keyed by origin (scheme, host and port after URL parsing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedOrigins {
    origins: Vec<Origin>,
}

impl AllowedOrigins {
    /// Fails when any entry is not an absolute URL with a host.
    pub fn new<I, S>(origins: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let origins = origins
            .into_iter()
            .map(|raw| {
                let raw = raw.as_ref();
                let origin = Url::parse(raw)
                    .map_err(|e| AppError::Config(format!("not an origin: {raw:?}: {e}")))?
                    .origin();
                if !origin.is_tuple() {
                    return Err(AppError::Config(format!("not an origin: {raw:?}: opaque")));
                }
                Ok(origin)
            })
            .collect::<ConfigResult<Vec<_>>>()?;
        Ok(Self { origins })
    }

    /// Serialized origins, e.g. `https://addons.cdn.mozilla.net`
    pub fn origins(&self) -> Vec<String> {
        self.origins.iter().map(Origin::ascii_serialization).collect()
    }
}

impl OriginPolicy for AllowedOrigins {
    /// Relative and unparsable URLs are never allowed. Opaque origins
    /// (`data:`, `javascript:`) never compare equal to a listed origin.
    fn is_allowed(&self, url: &str) -> bool {
        match Url::parse(url) {
            Ok(parsed) => {
                let origin = parsed.origin();
                self.origins.iter().any(|allowed| *allowed == origin)
            }
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CDN: &str = "https://addons.cdn.mozilla.net";

    fn cdn_policy() -> AllowedOrigins {
        AllowedOrigins::new([CDN]).unwrap()
    }

    #[test]
    fn allow_list_matches_whole_origin() {
        let policy = AllowedOrigins::new(["https://addons.cdn.mozilla.net/"]).unwrap();
        assert!(policy.is_allowed("https://addons.cdn.mozilla.net/webdev-64.png"));
        assert!(policy.is_allowed("https://addons.cdn.mozilla.net/x.png?m=1#top"));
        assert!(!policy.is_allowed("http://addons.cdn.mozilla.net/webdev-64.png"));
        assert!(!policy.is_allowed("https://addons.cdn.mozilla.net:8443/webdev-64.png"));
        assert!(!policy.is_allowed("https://addons.cdn.mozilla.net.evil.com/a.png"));
        assert!(!policy.is_allowed("https://xyz.com/a.png"));
        assert!(!policy.is_allowed("/static/img.png"));
        assert!(!policy.is_allowed(""));
    }

    #[test]
    fn backslash_in_authority_is_a_path_separator() {
        let url = r"https://evil.example\@addons.cdn.mozilla.net/x.png";
        assert_eq!(Url::parse(url).unwrap().host_str(), Some("evil.example"));
        assert!(!cdn_policy().is_allowed(url));
    }

    #[test]
    fn userinfo_does_not_change_the_origin() {
        let policy = cdn_policy();
        assert!(!policy.is_allowed("https://addons.cdn.mozilla.net@evil.example/x.png"));
        assert!(policy.is_allowed("https://user:pw@addons.cdn.mozilla.net/x.png"));
    }

    #[test]
    fn explicit_default_port_is_the_same_origin() {
        let policy = cdn_policy();
        assert!(policy.is_allowed("https://addons.cdn.mozilla.net:443/x.png"));
        let with_port = AllowedOrigins::new(["https://addons.cdn.mozilla.net:443"]).unwrap();
        assert!(with_port.is_allowed("https://addons.cdn.mozilla.net/x.png"));
        assert_eq!(with_port.origins(), vec![CDN.to_string()]);
    }

    #[test]
    fn hosts_are_normalized_before_comparing() {
        let policy = cdn_policy();
        assert!(policy.is_allowed("HTTPS://Addons.CDN.Mozilla.NET/x.png"));
        assert!(policy.is_allowed("https://addons%2Ecdn.mozilla.net/x.png"));
        assert!(!policy.is_allowed("https://evil%2Eexample/x.png"));
    }

    #[test]
    fn script_and_data_urls_are_rejected() {
        let policy = cdn_policy();
        assert!(!policy.is_allowed("javascript:alert(1)"));
        assert!(!policy.is_allowed("data:image/png;base64,iVBORw0KGgo="));
    }

    #[test]
    fn rejects_relative_and_opaque_entries() {
        assert!(matches!(AllowedOrigins::new(["cdn.example"]), Err(AppError::Config(_))));
        assert!(matches!(AllowedOrigins::new(["data:text/plain,x"]), Err(AppError::Config(_))));
    }

    #[test]
    fn closures_are_policies() {
        let only_https = |url: &str| url.starts_with("https://");
        assert!(only_https.is_allowed("https://a"));
        assert!(!only_https.is_allowed("http://a"));
    }
}

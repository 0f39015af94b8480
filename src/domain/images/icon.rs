use super::origin::OriginPolicy;
use crate::domain::addon::Addon;

/// Icon shown for an add-on: its own icon when it is served from an allowed
/// origin, `fallback_icon` otherwise (including while the add-on is loading).
pub fn get_addon_icon_url(addon: Option<&Addon>, policy: &dyn OriginPolicy, fallback_icon: &str) -> String {
    addon
        .and_then(|a| a.icon_url.as_deref())
        .filter(|url| !url.is_empty() && policy.is_allowed(url))
        .unwrap_or(fallback_icon)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::images::AllowedOrigins;

    const FALLBACK: &str = "/static/img/icons/default-64.png";

    fn policy() -> AllowedOrigins {
        AllowedOrigins::new(["https://addons.cdn.mozilla.net"]).unwrap()
    }

    fn addon_with_icon(icon: &str) -> Addon {
        let mut addon = Addon::new(3, "icon");
        addon.icon_url = Some(icon.to_string());
        addon
    }

    #[test]
    fn returns_allowed_icon() {
        let icon = "https://addons.cdn.mozilla.net/webdev-64.png";
        assert_eq!(get_addon_icon_url(Some(&addon_with_icon(icon)), &policy(), FALLBACK), icon);
    }

    #[test]
    fn falls_back_for_foreign_origin() {
        let addon = addon_with_icon("https://xyz.com/a.png");
        assert_eq!(get_addon_icon_url(Some(&addon), &policy(), FALLBACK), FALLBACK);
    }

    #[test]
    fn falls_back_without_addon_or_icon() {
        assert_eq!(get_addon_icon_url(None, &policy(), FALLBACK), FALLBACK);
        assert_eq!(get_addon_icon_url(Some(&Addon::new(1, "x")), &policy(), FALLBACK), FALLBACK);
    }
}

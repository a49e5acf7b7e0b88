//! Script registration and vendor SDK tag rewriting.

use osm_core::{CountryCode, Settings};
use tracing::debug;

use crate::markup::escape_attribute;
use crate::overrides::PlacementOverrides;
use crate::page::{should_enqueue, PageContext};
use crate::region::region_for_country;

/// Handle of the vendor SDK bundle. The only handle tag rewriting
/// applies to.
pub const SDK_HANDLE: &str = "osm-sdk";

/// Handle of the integration's own bundle.
pub const INTEGRATION_HANDLE: &str = "osm-onsite-messaging";

/// A script the host platform is asked to register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRegistration {
    pub handle: &'static str,
    pub src: String,
    pub deps: Vec<&'static str>,
}

/// Script registrations for this page render.
///
/// Empty when the integration is disabled or the page does not enqueue.
/// Without a configured client id the vendor SDK is skipped but the
/// integration bundle still loads (it degrades on its own).
pub fn script_registrations(
    page: &PageContext,
    settings: &Settings,
    base_country: &CountryCode,
    overrides: &PlacementOverrides,
) -> Vec<ScriptRegistration> {
    if !settings.enabled || !should_enqueue(page) {
        return Vec::new();
    }

    let mut registrations = Vec::new();
    let sdk_available = settings.client_id().is_some();
    if sdk_available {
        let region = region_for_country(base_country, overrides);
        registrations.push(ScriptRegistration {
            handle: SDK_HANDLE,
            src: format!("https://{region}-library.osmservices.com/lib.js"),
            deps: Vec::new(),
        });
    } else {
        debug!("no client id configured, vendor SDK registration suppressed");
    }

    registrations.push(ScriptRegistration {
        handle: INTEGRATION_HANDLE,
        src: "assets/js/onsite-messaging.js".to_string(),
        deps: if sdk_available {
            vec![SDK_HANDLE]
        } else {
            Vec::new()
        },
    });

    registrations
}

/// Rewrite the rendered tag for the vendor SDK handle: load it async and
/// attach the environment and client identifier. Any other handle passes
/// through untouched.
pub fn inject_sdk_attributes(
    handle: &str,
    tag: &str,
    settings: &Settings,
    overrides: &PlacementOverrides,
) -> String {
    if handle != SDK_HANDLE {
        return tag.to_string();
    }

    let client_id = {
        let current = settings.client_id().unwrap_or_default().to_string();
        match &overrides.client_id {
            Some(f) => f(current),
            None => current,
        }
    };
    if client_id.is_empty() {
        debug!("no client id after overrides, SDK tag left untouched");
        return tag.to_string();
    }

    let environment = if settings.test_mode {
        "playground"
    } else {
        "production"
    };

    let Some(src_at) = tag.find(" src=") else {
        return tag.to_string();
    };
    format!(
        "{} async data-environment=\"{}\" data-client-id=\"{}\"{}",
        &tag[..src_at],
        environment,
        escape_attribute(&client_id),
        &tag[src_at..],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> Settings {
        Settings {
            client_id: Some("merchant-123".to_string()),
            ..Settings::default()
        }
    }

    fn product_page() -> PageContext {
        PageContext {
            is_product_page: true,
            ..PageContext::default()
        }
    }

    fn base(code: &str) -> CountryCode {
        code.parse().unwrap()
    }

    #[test]
    fn registers_sdk_and_integration_bundle() {
        let registrations = script_registrations(
            &product_page(),
            &configured(),
            &base("US"),
            &PlacementOverrides::default(),
        );
        assert_eq!(registrations.len(), 2);
        assert_eq!(registrations[0].handle, SDK_HANDLE);
        assert_eq!(
            registrations[0].src,
            "https://na-library.osmservices.com/lib.js"
        );
        assert_eq!(registrations[1].handle, INTEGRATION_HANDLE);
        assert_eq!(registrations[1].deps, vec![SDK_HANDLE]);
    }

    #[test]
    fn sdk_src_follows_region() {
        for (country, region) in [("SE", "eu"), ("AU", "oc"), ("CA", "na")] {
            let registrations = script_registrations(
                &product_page(),
                &configured(),
                &base(country),
                &PlacementOverrides::default(),
            );
            assert_eq!(
                registrations[0].src,
                format!("https://{region}-library.osmservices.com/lib.js"),
            );
        }
    }

    #[test]
    fn missing_client_id_skips_sdk_only() {
        let registrations = script_registrations(
            &product_page(),
            &Settings::default(),
            &base("US"),
            &PlacementOverrides::default(),
        );
        assert_eq!(registrations.len(), 1);
        assert_eq!(registrations[0].handle, INTEGRATION_HANDLE);
        assert!(registrations[0].deps.is_empty());
    }

    #[test]
    fn disabled_or_suppressed_pages_register_nothing() {
        let disabled = Settings {
            enabled: false,
            ..configured()
        };
        assert!(script_registrations(
            &product_page(),
            &disabled,
            &base("US"),
            &PlacementOverrides::default()
        )
        .is_empty());

        let shortcode_elsewhere = PageContext {
            content_has_shortcode: true,
            ..PageContext::default()
        };
        assert!(script_registrations(
            &shortcode_elsewhere,
            &configured(),
            &base("US"),
            &PlacementOverrides::default()
        )
        .is_empty());
    }

    #[test]
    fn sdk_tag_gets_async_and_data_attributes() {
        let tag = "<script src=\"https://na-library.osmservices.com/lib.js\"></script>";
        let rewritten = inject_sdk_attributes(
            SDK_HANDLE,
            tag,
            &configured(),
            &PlacementOverrides::default(),
        );
        assert_eq!(
            rewritten,
            "<script async data-environment=\"production\" \
             data-client-id=\"merchant-123\" \
             src=\"https://na-library.osmservices.com/lib.js\"></script>"
        );
    }

    #[test]
    fn test_mode_targets_playground() {
        let settings = Settings {
            test_mode: true,
            ..configured()
        };
        let rewritten = inject_sdk_attributes(
            SDK_HANDLE,
            "<script src=\"x.js\"></script>",
            &settings,
            &PlacementOverrides::default(),
        );
        assert!(rewritten.contains("data-environment=\"playground\""));
    }

    #[test]
    fn other_handles_pass_through() {
        let tag = "<script src=\"x.js\"></script>";
        let rewritten = inject_sdk_attributes(
            INTEGRATION_HANDLE,
            tag,
            &configured(),
            &PlacementOverrides::default(),
        );
        assert_eq!(rewritten, tag);
    }

    #[test]
    fn client_id_override_replaces_configured_value() {
        let overrides =
            PlacementOverrides::default().with_client_id(|_| "other-client".to_string());
        let rewritten = inject_sdk_attributes(
            SDK_HANDLE,
            "<script src=\"x.js\"></script>",
            &configured(),
            &overrides,
        );
        assert!(rewritten.contains("data-client-id=\"other-client\""));
    }

    #[test]
    fn missing_client_id_leaves_tag_untouched() {
        let tag = "<script src=\"x.js\"></script>";
        let rewritten = inject_sdk_attributes(
            SDK_HANDLE,
            tag,
            &Settings::default(),
            &PlacementOverrides::default(),
        );
        assert_eq!(rewritten, tag);
    }
}

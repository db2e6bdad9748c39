use std::fmt;

use crate::schema::{Modules, NativeModule};

/// Platform identifier a generation run targets.
///
/// Opaque: compared by exact string equality against each module's
/// `excludedPlatforms` entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(transparent)]
pub struct TargetPlatform(String);

impl TargetPlatform {
    pub const ANDROID: &'static str = "android";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn android() -> Self {
        Self::new(Self::ANDROID)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TargetPlatform {
    fn default() -> Self {
        Self::android()
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keep the modules that are not excluded for `platform`.
///
/// Returns a new map; the collected one is left as is. An empty result is valid.
pub fn filter_for_platform<'a>(modules: &Modules<'a>, platform: &TargetPlatform) -> Modules<'a> {
    modules
        .iter()
        .filter(|(_, m)| module_supports_platform(m, platform))
        .map(|(name, m)| (*name, *m))
        .collect()
}

pub fn module_supports_platform(m: &NativeModule, p: &TargetPlatform) -> bool {
    match &m.excluded_platforms {
        None => true,
        Some(excluded) => !excluded.iter().any(|x| x == p.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(excluded: Option<&[&str]>) -> NativeModule {
        NativeModule {
            excluded_platforms: excluded.map(|xs| xs.iter().map(|s| s.to_string()).collect()),
        }
    }

    #[test]
    fn keeps_modules_without_exclusions() {
        let plain = module(None);
        let empty = module(Some(&[]));
        let modules = Modules::from([("Plain", &plain), ("EmptyList", &empty)]);

        let kept = filter_for_platform(&modules, &TargetPlatform::android());
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn drops_module_excluding_target() {
        let ios_only = module(Some(&["android"]));
        let android_only = module(Some(&["iOS"]));
        let modules = Modules::from([("IosOnly", &ios_only), ("AndroidOnly", &android_only)]);

        let kept = filter_for_platform(&modules, &TargetPlatform::android());
        assert_eq!(kept.keys().copied().collect::<Vec<_>>(), vec!["AndroidOnly"]);

        let kept_ios = filter_for_platform(&modules, &TargetPlatform::new("iOS"));
        assert_eq!(kept_ios.keys().copied().collect::<Vec<_>>(), vec!["IosOnly"]);
    }

    #[test]
    fn platform_match_is_case_sensitive() {
        let m = module(Some(&["Android"]));
        assert!(module_supports_platform(&m, &TargetPlatform::android()));
    }

    #[test]
    fn filtering_does_not_touch_input() {
        let gone = module(Some(&["android"]));
        let modules = Modules::from([("Gone", &gone)]);

        let kept = filter_for_platform(&modules, &TargetPlatform::android());
        assert!(kept.is_empty());
        assert_eq!(modules.len(), 1);
    }
}

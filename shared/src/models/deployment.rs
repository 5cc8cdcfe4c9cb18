use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::ConfigError;

/// Literal values baked into the artifact for one deployment target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub api_base_url: &'static str,
    pub predict: &'static str,
    pub home: &'static str,
}

/// The hosting environments an artifact can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeploymentTarget {
    /// Frontend and API behind the same origin (Vercel rewrites `/api/*`)
    SameOrigin,
    /// Flask development server on the developer's machine
    Local,
    Render,
    #[serde(rename = "huggingface")]
    HuggingFace,
}

impl Default for DeploymentTarget {
    fn default() -> Self {
        DeploymentTarget::SameOrigin
    }
}

impl DeploymentTarget {
    pub const ALL: [DeploymentTarget; 4] = [
        DeploymentTarget::SameOrigin,
        DeploymentTarget::Local,
        DeploymentTarget::Render,
        DeploymentTarget::HuggingFace,
    ];

    /// Canonical selection key
    pub const fn key(self) -> &'static str {
        self.aliases()[0]
    }

    /// Every key accepted for this target, canonical key first
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            DeploymentTarget::SameOrigin => &["same-origin", "vercel", "production"],
            DeploymentTarget::Local => &["local", "dev", "development"],
            DeploymentTarget::Render => &["render"],
            DeploymentTarget::HuggingFace => &["huggingface", "hf"],
        }
    }

    pub const fn profile(self) -> Profile {
        match self {
            DeploymentTarget::SameOrigin => Profile {
                api_base_url: "",
                predict: "/api/predict",
                home: "/",
            },
            DeploymentTarget::Local => Profile {
                api_base_url: "http://localhost:5000",
                predict: "/api/predict",
                home: "/",
            },
            DeploymentTarget::Render => Profile {
                api_base_url: "https://grape-scan-api.onrender.com",
                predict: "/api/predict",
                home: "/",
            },
            DeploymentTarget::HuggingFace => Profile {
                api_base_url: "https://grape-scan-api.hf.space",
                predict: "/predict",
                home: "/",
            },
        }
    }

    /// Const lookup used to pick the target while compiling.
    /// Matches ASCII case-insensitively; no trimming.
    pub const fn from_key(key: &str) -> Option<DeploymentTarget> {
        let mut t = 0;
        while t < Self::ALL.len() {
            let target = Self::ALL[t];
            let aliases = target.aliases();
            let mut a = 0;
            while a < aliases.len() {
                if key_matches(key, aliases[a]) {
                    return Some(target);
                }
                a += 1;
            }
            t += 1;
        }
        None
    }
}

const fn key_matches(input: &str, key: &str) -> bool {
    let input = input.as_bytes();
    let key = key.as_bytes();
    if input.len() != key.len() {
        return false;
    }
    let mut i = 0;
    while i < input.len() {
        if input[i].to_ascii_lowercase() != key[i].to_ascii_lowercase() {
            return false;
        }
        i += 1;
    }
    true
}

impl fmt::Display for DeploymentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DeploymentTarget {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeploymentTarget::from_key(s.trim()).ok_or_else(|| ConfigError::UnknownTarget(s.to_string()))
    }
}

/// Target chosen by the build through `APP_DEPLOY_TARGET`.
///
/// Unset or empty means [`DeploymentTarget::SameOrigin`]. An unknown key stops
/// the build.
pub const SELECTED_TARGET: DeploymentTarget = match option_env!("APP_DEPLOY_TARGET") {
    None => DeploymentTarget::SameOrigin,
    Some(key) if key.is_empty() => DeploymentTarget::SameOrigin,
    Some(key) => match DeploymentTarget::from_key(key) {
        Some(target) => target,
        None => panic!("APP_DEPLOY_TARGET does not name a known deployment target"),
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("same-origin", DeploymentTarget::SameOrigin)]
    #[case("Vercel", DeploymentTarget::SameOrigin)]
    #[case("PRODUCTION", DeploymentTarget::SameOrigin)]
    #[case("local", DeploymentTarget::Local)]
    #[case(" dev ", DeploymentTarget::Local)]
    #[case("development", DeploymentTarget::Local)]
    #[case("render", DeploymentTarget::Render)]
    #[case("hf", DeploymentTarget::HuggingFace)]
    #[case("HuggingFace", DeploymentTarget::HuggingFace)]
    fn test_target_from_str(#[case] input: &str, #[case] expected: DeploymentTarget) {
        assert_eq!(input.parse::<DeploymentTarget>().unwrap(), expected);
    }

    #[rstest]
    #[case("staging")]
    #[case("")]
    #[case("same_origin")]
    fn test_unknown_target(#[case] input: &str) {
        assert_eq!(
            input.parse::<DeploymentTarget>().unwrap_err(),
            ConfigError::UnknownTarget(input.to_string())
        );
    }

    #[test]
    fn test_const_lookup_agrees_with_from_str() {
        for target in DeploymentTarget::ALL {
            for alias in target.aliases() {
                assert_eq!(DeploymentTarget::from_key(alias), Some(target));
                assert_eq!(alias.parse::<DeploymentTarget>().unwrap(), target);
            }
            assert_eq!(target.to_string().parse::<DeploymentTarget>().unwrap(), target);
        }
    }

    #[test]
    fn test_aliases_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for target in DeploymentTarget::ALL {
            for alias in target.aliases() {
                assert!(seen.insert(*alias), "alias {} used twice", alias);
            }
        }
    }

    #[test]
    fn test_default_is_same_origin() {
        assert_eq!(DeploymentTarget::default(), DeploymentTarget::SameOrigin);
        assert_eq!(DeploymentTarget::SameOrigin.profile().api_base_url, "");
    }

    #[test]
    fn test_selected_target_is_known() {
        assert!(DeploymentTarget::ALL.contains(&SELECTED_TARGET));
    }

    #[test]
    fn test_serde_uses_selection_keys() {
        let json = serde_json::to_string(&DeploymentTarget::SameOrigin).unwrap();
        assert_eq!(json, "\"same-origin\"");
        let target: DeploymentTarget = serde_json::from_str("\"huggingface\"").unwrap();
        assert_eq!(target, DeploymentTarget::HuggingFace);
    }
}

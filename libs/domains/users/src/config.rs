use core_config::{ConfigError, FromEnv, env_list};

/// Operators granted the admin capability regardless of their stored role.
///
/// Loaded from `ADMIN_EMAILS` (comma separated). Matching ignores ASCII case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminConfig {
    pub emails: Vec<String>,
}

impl AdminConfig {
    pub fn new<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            emails: emails.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_listed(&self, email: &str) -> bool {
        self.emails.iter().any(|e| e.eq_ignore_ascii_case(email))
    }
}

impl FromEnv for AdminConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(env_list("ADMIN_EMAILS")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_config_from_env() {
        temp_env::with_var("ADMIN_EMAILS", Some(" ops@x.com, Boss@X.com ,"), || {
            let config = AdminConfig::from_env().unwrap();
            assert_eq!(config.emails, vec!["ops@x.com", "Boss@X.com"]);
            assert!(config.is_listed("boss@x.com"));
            assert!(!config.is_listed("a@x.com"));
        });
    }

    #[test]
    fn test_admin_config_unset_is_empty() {
        temp_env::with_var("ADMIN_EMAILS", None::<&str>, || {
            assert_eq!(AdminConfig::from_env().unwrap(), AdminConfig::default());
        });
    }
}

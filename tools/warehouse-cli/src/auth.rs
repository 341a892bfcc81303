//! Login gate for the interactive shell.

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::config::{AuthConfig, UserEntry};

/// Known users, from the config followed by the users file.
#[derive(Debug, Clone, Default)]
pub struct Authenticator {
    users: Vec<UserEntry>,
}

impl Authenticator {
    /// Collect users from `config`. A relative `users_file` resolves
    /// against `base_dir`.
    pub fn from_config(config: &AuthConfig, base_dir: &Path) -> Result<Self> {
        let mut users = config.users.clone();

        if let Some(file) = &config.users_file {
            let path = base_dir.join(file);
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read users file: {}", path.display()))?;
            users.extend(parse_users(&text));
        }

        Ok(Self { users })
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Check a username and password pair.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.users
            .iter()
            .any(|u| u.username == username && u.password == password)
    }
}

/// Parse `username, password` lines. Lines without a comma are ignored.
pub fn parse_users(text: &str) -> Vec<UserEntry> {
    text.lines()
        .filter_map(|line| {
            let (username, password) = line.split_once(',')?;
            let username = username.trim();
            let password = password.trim();
            if username.is_empty() {
                return None;
            }
            Some(UserEntry {
                username: username.to_string(),
                password: password.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_users() {
        let users = parse_users("alice, secret\nbob,hunter2\n\nnot a user\n, orphan\n");
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "alice");
        assert_eq!(users[0].password, "secret");
        assert_eq!(users[1].password, "hunter2");
    }

    #[test]
    fn test_config_and_file_users() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("users.txt"), "clerk, pw\n").unwrap();

        let config = AuthConfig {
            enabled: true,
            users_file: Some("users.txt".into()),
            users: vec![UserEntry {
                username: "admin".to_string(),
                password: "root".to_string(),
            }],
        };
        let auth = Authenticator::from_config(&config, dir.path()).unwrap();
        assert_eq!(auth.len(), 2);
        assert!(auth.verify("admin", "root"));
        assert!(auth.verify("clerk", "pw"));
        assert!(!auth.verify("clerk", "root"));
        assert!(!auth.verify("nobody", ""));
    }

    #[test]
    fn test_missing_users_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AuthConfig {
            enabled: true,
            users_file: Some("users.txt".into()),
            users: Vec::new(),
        };
        assert!(Authenticator::from_config(&config, dir.path()).is_err());
    }
}

use std::path::PathBuf;

pub(crate) const APP_DIR: &str = "corner-radius";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigPathError {
    MissingHomeDirectory,
}

/// The two environment roots a config file can live under.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ConfigDirs {
    pub(crate) xdg_config_home: Option<PathBuf>,
    pub(crate) home: Option<PathBuf>,
}

impl ConfigDirs {
    pub(crate) fn from_env() -> Self {
        Self {
            xdg_config_home: std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
            home: std::env::var_os("HOME").map(PathBuf::from),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_xdg(root: &std::path::Path) -> Self {
        Self {
            xdg_config_home: Some(root.to_path_buf()),
            home: None,
        }
    }

    /// `$XDG_CONFIG_HOME/<app>/<file>`, falling back to `$HOME/.config`.
    pub(crate) fn file_path(&self, file_name: &str) -> Result<PathBuf, ConfigPathError> {
        let mut path = self.root()?;
        path.push(APP_DIR);
        path.push(file_name);
        Ok(path)
    }

    fn root(&self) -> Result<PathBuf, ConfigPathError> {
        if let Some(xdg) = self
            .xdg_config_home
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
        {
            return Ok(xdg.to_path_buf());
        }

        let home = self
            .home
            .as_deref()
            .ok_or(ConfigPathError::MissingHomeDirectory)?;
        Ok(home.join(".config"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_path_prefers_xdg_config_home() {
        let dirs = ConfigDirs {
            xdg_config_home: Some(PathBuf::from("/tmp/config-root")),
            home: Some(PathBuf::from("/tmp/home")),
        };
        assert_eq!(
            dirs.file_path("radius.json").unwrap(),
            PathBuf::from("/tmp/config-root/corner-radius/radius.json")
        );
    }

    #[test]
    fn file_path_ignores_empty_xdg_value() {
        let dirs = ConfigDirs {
            xdg_config_home: Some(PathBuf::new()),
            home: Some(PathBuf::from("/tmp/home")),
        };
        assert_eq!(
            dirs.file_path("radius.json").unwrap(),
            PathBuf::from("/tmp/home/.config/corner-radius/radius.json")
        );
    }

    #[test]
    fn file_path_errors_when_home_missing_and_xdg_unset() {
        let error = ConfigDirs::default().file_path("radius.json").unwrap_err();
        assert_eq!(error, ConfigPathError::MissingHomeDirectory);
    }
}

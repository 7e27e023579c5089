//! Fixed description of the notification abstraction the rewrite targets.
//!
//! The tool exposes no configuration surface: there is no config file and no
//! option that changes the transformation. The constants live here so the
//! import injector and the rewrite rules agree on the same identifiers.

/// Identifier the rewritten code calls into.
pub const DEFAULT_MANAGER: &str = "notificationManager";

/// Module the import line points at, relative to the migrated file.
pub const DEFAULT_IMPORT_PATH: &str = "../../utils/notification";

/// Severity tag passed to `show` for former informational dialogs.
pub const DEFAULT_INFO_SEVERITY: &str = "info";

/// Module whose import anchors the fallback insertion point.
pub const DEFAULT_FRAMEWORK_MODULE: &str = "react";

/// Where rewritten calls go and how the manager is imported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationTarget {
    pub manager: String,
    pub import_path: String,
    pub info_severity: String,
    pub framework_module: String,
}

impl Default for NotificationTarget {
    fn default() -> Self {
        Self {
            manager: DEFAULT_MANAGER.to_string(),
            import_path: DEFAULT_IMPORT_PATH.to_string(),
            info_severity: DEFAULT_INFO_SEVERITY.to_string(),
            framework_module: DEFAULT_FRAMEWORK_MODULE.to_string(),
        }
    }
}

impl NotificationTarget {
    /// The import statement inserted into migrated files (without line ending).
    pub fn import_statement(&self) -> String {
        format!("import {} from '{}';", self.manager, self.import_path)
    }
}

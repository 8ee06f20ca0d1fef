//! Presence and outcome types.

/// Whether a module resolved at the moment it was checked.
///
/// Never cached: the environment can change right after the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleStatus {
    /// The resolver located the module.
    Present,
    /// The resolver could not locate the module.
    Absent,
}

/// What `ensure_installed` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// The library was already resolvable; nothing was run.
    AlreadyInstalled,
    /// The installer ran once and exited successfully.
    Installed,
}

//! Resolves the focused window to an application name

use tracing::info;

use super::rules::RuleSet;
use super::{ProcessTable, ResolveError, WindowSystem};

/// Source of the active application name
pub trait ActiveApplication {
    fn resolve(&self) -> Result<String, ResolveError>;
}

/// Combines the window system, the process table and the remapping rules
pub struct Resolver<W, P> {
    windows: W,
    processes: P,
    rules: RuleSet,
}

impl<W: WindowSystem, P: ProcessTable> Resolver<W, P> {
    pub fn new(windows: W, processes: P, rules: RuleSet) -> Self {
        Self {
            windows,
            processes,
            rules,
        }
    }
}

impl<W: WindowSystem, P: ProcessTable> ActiveApplication for Resolver<W, P> {
    fn resolve(&self) -> Result<String, ResolveError> {
        let window = self.windows.active_window()?;
        let command = self.processes.command_name(window.pid)?;
        let name = self.rules.canonical_name(&command, &window.class_group);

        info!(
            pid = window.pid,
            command = command.trim_end(),
            class_group = %window.class_group,
            application = %name,
            "active application resolved"
        );

        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::window::ActiveWindow;

    struct FakeWindows(Option<ActiveWindow>);

    impl WindowSystem for FakeWindows {
        fn active_window(&self) -> Result<ActiveWindow, ResolveError> {
            self.0.clone().ok_or(ResolveError::NoActiveWindow)
        }
    }

    struct FakeProcesses(HashMap<u32, &'static str>);

    impl ProcessTable for FakeProcesses {
        fn command_name(&self, pid: u32) -> Result<String, ResolveError> {
            self.0
                .get(&pid)
                .map(|name| name.to_string())
                .ok_or_else(|| ResolveError::ProcessUnavailable {
                    pid,
                    source: std::io::ErrorKind::NotFound.into(),
                })
        }
    }

    fn resolver(
        class_group: &str,
        command: Option<&'static str>,
    ) -> Resolver<FakeWindows, FakeProcesses> {
        let window = ActiveWindow {
            id: 0x3a0000a,
            pid: 100,
            class_group: class_group.to_string(),
        };
        let processes = command.map(|c| (100, c)).into_iter().collect();
        Resolver::new(
            FakeWindows(Some(window)),
            FakeProcesses(processes),
            RuleSet::builtin(),
        )
    }

    #[test]
    fn test_resolves_jetbrains() {
        assert_eq!(
            resolver("jetbrains-idea", Some("java\n")).resolve().unwrap(),
            "Jetbrains"
        );
    }

    #[test]
    fn test_resolves_pinta() {
        assert_eq!(resolver("Pinta", Some("main\n")).resolve().unwrap(), "Pinta");
    }

    #[test]
    fn test_resolves_plain_process() {
        assert_eq!(
            resolver("Foo", Some("foo bar\n")).resolve().unwrap(),
            "Foo Bar"
        );
    }

    #[test]
    fn test_no_active_window() {
        let resolver = Resolver::new(
            FakeWindows(None),
            FakeProcesses(HashMap::new()),
            RuleSet::builtin(),
        );
        assert!(matches!(resolver.resolve(), Err(ResolveError::NoActiveWindow)));
    }

    #[test]
    fn test_vanished_process() {
        assert!(matches!(
            resolver("Firefox", None).resolve(),
            Err(ResolveError::ProcessUnavailable { pid: 100, .. })
        ));
    }
}

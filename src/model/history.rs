//! Navigation History
//!
//! Current location plus back/forward stacks. `back()`/`forward()` verify the
//! destination still exists before committing, so the user never lands on a
//! vanished directory.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::fs::FileSystem;
use crate::logic::errors::ErrorKind;
use crate::logic::path;

/// What `navigate()` does when the target equals the current location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Push a duplicate entry (original behaviour)
    #[default]
    Keep,
    /// Treat it as a no-op
    Skip,
}

/// Result of a back/forward step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryStep {
    Moved(PathBuf),
    /// The respective stack is empty; nothing changed
    AtBoundary,
}

/// Back/forward navigation state machine
#[derive(Clone)]
pub struct NavigationHistory {
    current: PathBuf,
    /// Most recent last
    back: Vec<PathBuf>,
    /// Most recent last
    forward: Vec<PathBuf>,
    policy: DuplicatePolicy,
    fs: Arc<dyn FileSystem>,
}

impl fmt::Debug for NavigationHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationHistory")
            .field("current", &self.current)
            .field("back", &self.back)
            .field("forward", &self.forward)
            .field("policy", &self.policy)
            .finish()
    }
}

impl NavigationHistory {
    /// Start a session at `start`, which must be an existing directory
    pub fn new(start: &Path, fs: Arc<dyn FileSystem>, policy: DuplicatePolicy) -> Result<Self, ErrorKind> {
        let start = path::normalize(start);
        if !fs.is_dir(&start) {
            return Err(ErrorKind::NotFound);
        }
        Ok(Self {
            current: start,
            back: Vec::new(),
            forward: Vec::new(),
            policy,
            fs,
        })
    }

    pub fn current(&self) -> &Path {
        &self.current
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: DuplicatePolicy) {
        self.policy = policy;
    }

    /// Go to `target` (relative targets resolve against the current location)
    ///
    /// Pushes the current location onto the back stack and clears the forward
    /// stack. Fails with `NotFound` unless `target` is an existing directory.
    pub fn navigate(&mut self, target: &Path) -> Result<&Path, ErrorKind> {
        let target = path::resolve(&self.current, target);
        if !self.fs.is_dir(&target) {
            log::debug!("navigate: {} is not a directory", target.display());
            return Err(ErrorKind::NotFound);
        }

        if target == self.current && self.policy == DuplicatePolicy::Skip {
            return Ok(&self.current);
        }

        let previous = std::mem::replace(&mut self.current, target);
        self.back.push(previous);
        self.forward.clear();

        log::debug!("navigate: now at {}", self.current.display());
        Ok(&self.current)
    }

    /// Step back one location
    ///
    /// Returns `AtBoundary` when there is nowhere to go. If the previous
    /// location no longer exists the state is left untouched and
    /// `LocationUnavailable` is returned.
    pub fn back(&mut self) -> Result<HistoryStep, ErrorKind> {
        let step = Self::step(&*self.fs, &mut self.current, &mut self.back, &mut self.forward)?;
        if let HistoryStep::Moved(ref to) = step {
            log::debug!("back: now at {}", to.display());
        }
        Ok(step)
    }

    /// Step forward one location; mirror image of `back()`
    pub fn forward(&mut self) -> Result<HistoryStep, ErrorKind> {
        let step = Self::step(&*self.fs, &mut self.current, &mut self.forward, &mut self.back)?;
        if let HistoryStep::Moved(ref to) = step {
            log::debug!("forward: now at {}", to.display());
        }
        Ok(step)
    }

    /// Navigate to the parent directory; `AtBoundary` at the root
    pub fn go_up(&mut self) -> Result<HistoryStep, ErrorKind> {
        match path::parent(&self.current) {
            Some(parent) => self.navigate(&parent).map(|p| HistoryStep::Moved(p.to_path_buf())),
            None => Ok(HistoryStep::AtBoundary),
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// Back stack, most recent last
    pub fn back_stack(&self) -> &[PathBuf] {
        &self.back
    }

    /// Forward stack, most recent last
    pub fn forward_stack(&self) -> &[PathBuf] {
        &self.forward
    }

    /// Pop from `from` into `current`, pushing the old `current` onto `to`
    fn step(
        fs: &dyn FileSystem,
        current: &mut PathBuf,
        from: &mut Vec<PathBuf>,
        to: &mut Vec<PathBuf>,
    ) -> Result<HistoryStep, ErrorKind> {
        let Some(target) = from.last() else {
            return Ok(HistoryStep::AtBoundary);
        };

        // Check before mutating so a failure leaves both stacks intact
        if !fs.is_dir(target) {
            log::warn!("history entry {} is no longer available", target.display());
            return Err(ErrorKind::LocationUnavailable);
        }

        if let Some(target) = from.pop() {
            let previous = std::mem::replace(current, target);
            to.push(previous);
        }
        Ok(HistoryStep::Moved(current.clone()))
    }
}

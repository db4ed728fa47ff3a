use serde::Deserialize;

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResetStrategy {
    /// Repaint, then reload the whole page after the configured delay.
    #[default]
    Reload,
    /// Repaint and reset widget state without navigating.
    InPlace,
}

/// Host timer that reloads the page once a scheduled delay elapses.
pub trait ReloadTimer {
    type Handle;
    type Error;

    fn schedule(&mut self, delay_ms: i32) -> Result<Self::Handle, Self::Error>;
    fn cancel(&mut self, handle: Self::Handle);
}

/// At most one scheduled reload. `H` is the host's timer handle.
#[derive(Debug)]
pub struct PendingReset<H> {
    handle: Option<H>,
}

impl<H> Default for PendingReset<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> PendingReset<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a newly scheduled reload and returns the one it supersedes, which the
    /// caller must cancel.
    pub fn schedule(&mut self, handle: H) -> Option<H> {
        self.handle.replace(handle)
    }

    /// Called from the timer callback once the reload fires.
    pub fn fire(&mut self) -> Option<H> {
        self.handle.take()
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.handle.is_some()
    }
}

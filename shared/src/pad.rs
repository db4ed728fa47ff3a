use crate::config::WidgetConfig;
use crate::reset::{PendingReset, ReloadTimer, ResetStrategy};
use crate::sketch::{Sketch, Surface};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClearOutcome {
    /// Canvas repainted; a page reload is pending.
    ReloadScheduled,
    /// Canvas repainted and gesture ended; the host should blank its result text.
    ResetInPlace,
}

/// A sketch together with its clear/reset lifecycle.
pub struct SketchPad<S, H> {
    sketch: Sketch<S>,
    reset: ResetStrategy,
    reset_delay_ms: i32,
    pending: PendingReset<H>,
}

impl<S: Surface, H> SketchPad<S, H> {
    pub fn new(surface: S, config: &WidgetConfig) -> Self {
        Self {
            sketch: Sketch::new(surface, config),
            reset: config.reset,
            reset_delay_ms: config.reset_delay_ms,
            pending: PendingReset::new(),
        }
    }

    pub fn sketch(&self) -> &Sketch<S> {
        &self.sketch
    }

    pub fn sketch_mut(&mut self) -> &mut Sketch<S> {
        &mut self.sketch
    }

    /// Repaints immediately. With `Reload`, schedules a reload and cancels any earlier
    /// one still pending, so only the most recent clear navigates.
    pub fn clear<T>(&mut self, timer: &mut T) -> Result<ClearOutcome, T::Error>
    where
        T: ReloadTimer<Handle = H>,
    {
        match self.reset {
            ResetStrategy::Reload => {
                self.sketch.initialize();
                let handle = timer.schedule(self.reset_delay_ms)?;
                if let Some(previous) = self.pending.schedule(handle) {
                    timer.cancel(previous);
                }
                Ok(ClearOutcome::ReloadScheduled)
            }
            ResetStrategy::InPlace => {
                self.sketch.reset();
                Ok(ClearOutcome::ResetInPlace)
            }
        }
    }

    /// Called by the timer callback right before it reloads.
    pub fn reload_fired(&mut self) {
        self.pending.fire();
    }
}

use gloo_timers::callback::Timeout;

/// Slot for a transient UI reset. Arming it again cancels the pending reset,
/// and every arm hands out a fresh generation so state can ignore stale ones.
#[derive(Default)]
pub struct ResetTimer {
    generation: u32,
    pending: Option<Timeout>,
}

impl ResetTimer {
    pub fn arm<F>(&mut self, millis: u32, on_fire: F) -> u32
    where
        F: FnOnce(u32) + 'static,
    {
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        // Replacing the handle drops the old Timeout, which clears it.
        self.pending = Some(Timeout::new(millis, move || on_fire(generation)));
        generation
    }

    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }
}

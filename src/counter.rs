/// Render counter demo: clicks are recorded in `pending` without touching
/// what is displayed; `render` publishes them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderCounter {
    pending: u64,
    shown: u64,
}

impl RenderCounter {
    pub fn increment(&mut self) {
        self.pending += 1;
    }

    pub fn render(&mut self) {
        self.shown = self.pending;
    }

    pub fn shown(&self) -> u64 {
        self.shown
    }

    pub fn pending(&self) -> u64 {
        self.pending
    }
}

/// Coalescing helper for render/resize decisions taken once per loop turn
pub struct Coalescer;

impl Coalescer {
    /// Render when anything asked for it this turn
    #[inline]
    pub fn decide_render(queued_render_reqs: usize, state_changed: bool) -> bool {
        queued_render_reqs > 0 || state_changed
    }

    /// Many resizes in one turn collapse into the last one
    #[inline]
    pub fn decide_resize(
        last_seen: Option<(u16, u16)>,
        events: &[(u16, u16)],
    ) -> Option<(u16, u16)> {
        events.last().copied().or(last_seen)
    }
}

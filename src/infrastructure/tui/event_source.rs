use std::{collections::VecDeque, sync::Arc};

use tokio::sync::Mutex;

use crate::infrastructure::tui::{Event, TuiLike};

/// Where the runner pulls terminal events from. `Test` replays a fixed
/// script and ends the run once it is exhausted.
pub enum EventSource {
    Real(Arc<Mutex<dyn TuiLike + Send>>),
    Test(VecDeque<Event>),
}

impl EventSource {
    pub fn real(tui: Arc<Mutex<dyn TuiLike + Send>>) -> Self {
        EventSource::Real(tui)
    }

    pub fn test(events: impl IntoIterator<Item = Event>) -> Self {
        EventSource::Test(events.into_iter().collect())
    }

    /// Events still waiting in a scripted source
    pub fn pending(&self) -> Option<usize> {
        match self {
            EventSource::Real(_) => None,
            EventSource::Test(queue) => Some(queue.len()),
        }
    }

    pub async fn next(&mut self) -> Option<Event> {
        match self {
            EventSource::Real(tui) => tui.lock().await.next().await,
            EventSource::Test(queue) => queue.pop_front(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::tui::test::TestTui;

    #[tokio::test]
    async fn test_scripted_source_drains() {
        let mut source = EventSource::test([Event::Resize(80, 24), Event::Quit]);

        assert_eq!(source.pending(), Some(2));
        assert_eq!(source.next().await, Some(Event::Resize(80, 24)));
        assert_eq!(source.next().await, Some(Event::Quit));
        assert_eq!(source.next().await, None);
    }

    #[tokio::test]
    async fn test_real_source_delegates_to_tui() -> color_eyre::Result<()> {
        let tui: Arc<Mutex<dyn TuiLike + Send>> =
            Arc::new(Mutex::new(TestTui::with_events(10, 4, [Event::Tick])?));
        let mut source = EventSource::real(tui);

        assert_eq!(source.pending(), None);
        assert_eq!(source.next().await, Some(Event::Tick));
        assert_eq!(source.next().await, None);
        Ok(())
    }
}

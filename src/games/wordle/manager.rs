use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use super::Session;

/// Owns the process-wide session slot: zero or one game at a time.
///
/// Command handlers hold the lock for the duration of one command, so
/// access to the slot stays serialized even though the framework delivers
/// events concurrently.
#[derive(Debug, Clone, Default)]
pub struct ActiveSession {
    inner: Arc<Mutex<Option<Session>>>,
}

impl ActiveSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self) -> MutexGuard<'_, Option<Session>> {
        self.inner.lock().await
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::ActiveSession;
    use crate::games::wordle::{Session, Word};

    #[tokio::test]
    async fn the_slot_is_shared_between_clones() {
        let sessions = ActiveSession::new();
        assert!(sessions.lock().await.is_none());

        sessions
            .lock()
            .await
            .replace(Session::new(Word::from_str("crane").unwrap()));

        let clone = sessions.clone();
        assert!(clone
            .lock()
            .await
            .as_ref()
            .is_some_and(Session::is_active));

        clone.lock().await.take();
        assert!(sessions.lock().await.is_none());
    }
}

// src/pipeline/hooks.rs

use strum::{Display, EnumIter};

use super::graph::LevelSession;

/// Points in level generation the generator lets plugins hook into, in the
/// order they fire for a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
pub enum LifecycleEvent {
    /// The floor layout is done; nothing has been spawned on clients yet.
    FloorGenerated,
    /// General map objects are about to spawn.
    BeforeMapObjects,
    /// The level's scrap list is final and scrap is about to spawn.
    BeforeScrapSpawn,
}

pub type HookCallback = Box<dyn Fn(&mut LevelSession) + Send + Sync>;

/// Named callbacks registered against lifecycle events.
#[derive(Default)]
pub struct HookRegistry {
    hooks: Vec<(LifecycleEvent, HookCallback)>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(&mut self, event: LifecycleEvent, callback: F)
    where
        F: Fn(&mut LevelSession) + Send + Sync + 'static,
    {
        self.hooks.push((event, Box::new(callback)));
    }

    /// Runs every callback registered for `event`, in registration order.
    /// Returns how many ran.
    pub fn fire(&self, event: LifecycleEvent, session: &mut LevelSession) -> usize {
        let mut count = 0;
        for (_, callback) in self.hooks.iter().filter(|(e, _)| *e == event) {
            callback(session);
            count += 1;
        }
        count
    }

    pub fn count(&self, event: LifecycleEvent) -> usize {
        self.hooks.iter().filter(|(e, _)| *e == event).count()
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.hooks.iter().map(|(event, _)| event))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::graph::{GeneratedDungeon, SelectableLevel, SessionId};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn session() -> LevelSession {
        LevelSession::new(
            SessionId(1),
            SelectableLevel::default(),
            GeneratedDungeon::new("ExampleFlow"),
        )
    }

    #[test]
    fn test_fire_runs_matching_callbacks_in_order() {
        let mut hooks = HookRegistry::new();
        hooks.on(LifecycleEvent::FloorGenerated, |s| s.dungeon.flow_name.push('1'));
        hooks.on(LifecycleEvent::BeforeScrapSpawn, |s| s.dungeon.flow_name.push('x'));
        hooks.on(LifecycleEvent::FloorGenerated, |s| s.dungeon.flow_name.push('2'));

        let mut session = session();
        assert_eq!(hooks.fire(LifecycleEvent::FloorGenerated, &mut session), 2);
        assert_eq!(session.dungeon.flow_name, "ExampleFlow12");
    }

    #[test]
    fn test_fire_without_callbacks() {
        let hooks = HookRegistry::new();
        let mut session = session();
        assert_eq!(hooks.fire(LifecycleEvent::BeforeMapObjects, &mut session), 0);
    }

    #[test]
    fn test_count() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut hooks = HookRegistry::new();
        let seen = Arc::clone(&calls);
        hooks.on(LifecycleEvent::BeforeMapObjects, move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(hooks.count(LifecycleEvent::BeforeMapObjects), 1);
        assert_eq!(hooks.count(LifecycleEvent::FloorGenerated), 0);

        let mut session = session();
        hooks.fire(LifecycleEvent::BeforeMapObjects, &mut session);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_events_are_in_lifecycle_order() {
        assert!(LifecycleEvent::FloorGenerated < LifecycleEvent::BeforeMapObjects);
        assert!(LifecycleEvent::BeforeMapObjects < LifecycleEvent::BeforeScrapSpawn);
    }
}

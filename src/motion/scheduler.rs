use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
    time::Duration,
};

pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// One-shot timers. Each scheduled task runs at most once, and never after `cancel`.
pub trait Scheduler: Send + Sync + 'static {
    type Handle: Send + 'static;

    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle;
    fn cancel(&self, handle: Self::Handle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ManualHandle {
    due: Duration,
    id: u64,
}

#[derive(Default)]
struct ManualQueue {
    now: Duration,
    next_id: u64,
    tasks: BTreeMap<ManualHandle, Task>,
}

#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Arc<Mutex<ManualQueue>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.queue.lock().expect("should be able to lock timer queue").now
    }

    pub fn pending(&self) -> usize {
        self.queue
            .lock()
            .expect("should be able to lock timer queue")
            .tasks
            .len()
    }

    /// Moves the clock forward, running every task that falls due on the way in deadline order.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let task = {
                let mut queue = self.queue.lock().expect("should be able to lock timer queue");
                let due = match queue.tasks.first_key_value() {
                    Some((handle, _)) if handle.due <= target => handle.due,
                    _ => break,
                };
                queue.now = due;
                queue.tasks.pop_first().map(|(_, task)| task)
            };
            // the lock is released so the task may schedule its successor
            if let Some(task) = task {
                task();
            }
        }
        self.queue
            .lock()
            .expect("should be able to lock timer queue")
            .now = target;
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay: Duration, task: Task) -> ManualHandle {
        let mut queue = self.queue.lock().expect("should be able to lock timer queue");
        let handle = ManualHandle {
            due: queue.now + delay,
            id: queue.next_id,
        };
        queue.next_id += 1;
        queue.tasks.insert(handle, task);
        handle
    }

    fn cancel(&self, handle: ManualHandle) {
        self.queue
            .lock()
            .expect("should be able to lock timer queue")
            .tasks
            .remove(&handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        let make = move |name: &'static str| {
            let sink = sink.clone();
            Box::new(move || sink.lock().unwrap().push(name)) as Task
        };
        (log, make)
    }

    #[test]
    fn test_runs_in_deadline_order() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();
        scheduler.schedule(Duration::from_millis(30), task("c"));
        scheduler.schedule(Duration::from_millis(10), task("a"));
        scheduler.schedule(Duration::from_millis(20), task("b"));
        scheduler.schedule(Duration::from_millis(20), task("b2"));
        assert_eq!(scheduler.pending(), 4);

        scheduler.advance(Duration::from_millis(25));
        assert_eq!(*log.lock().unwrap(), vec!["a", "b", "b2"]);
        assert_eq!(scheduler.now(), Duration::from_millis(25));
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(Duration::from_millis(5));
        assert_eq!(*log.lock().unwrap(), vec!["a", "b", "b2", "c"]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_cancel() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();
        let handle = scheduler.schedule(Duration::from_millis(10), task("never"));
        scheduler.cancel(handle);
        // cancelling twice is harmless
        scheduler.cancel(handle);
        scheduler.advance(Duration::from_secs(1));
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_task_can_schedule_within_window() {
        let scheduler = ManualScheduler::new();
        let hits = Arc::new(Mutex::new(Vec::new()));
        let inner = scheduler.clone();
        let sink = hits.clone();
        scheduler.schedule(
            Duration::from_millis(10),
            Box::new(move || {
                sink.lock().unwrap().push(inner.now());
                let sink = sink.clone();
                let clock = inner.clone();
                inner.schedule(
                    Duration::from_millis(10),
                    Box::new(move || sink.lock().unwrap().push(clock.now())),
                );
            }),
        );
        scheduler.advance(Duration::from_millis(50));
        assert_eq!(
            *hits.lock().unwrap(),
            vec![Duration::from_millis(10), Duration::from_millis(20)]
        );
        assert_eq!(scheduler.now(), Duration::from_millis(50));
    }
}

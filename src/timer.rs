use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

struct Scheduled<T> {
    handle: TaskHandle,
    deadline: Duration,
    task: T,
}

/// Frame driven timer queue.
///
/// Tasks are plain data captured at scheduling time and handed back by
/// [`Scheduler::poll`] once the host clock reaches their deadline, so nothing
/// runs while a task is being scheduled.
pub struct Scheduler<T> {
    next_handle: u64,
    // Sorted by deadline, insertion order for equal deadlines.
    queue: Vec<Scheduled<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            next_handle: 0,
            queue: vec![],
        }
    }

    pub fn schedule(&mut self, now: Duration, delay: Duration, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        let deadline = now + delay;
        let index = self
            .queue
            .partition_point(|scheduled| scheduled.deadline <= deadline);
        self.queue.insert(
            index,
            Scheduled {
                handle,
                deadline,
                task,
            },
        );
        handle
    }

    /// Returns `false` if the task already ran or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        match self
            .queue
            .iter()
            .position(|scheduled| scheduled.handle == handle)
        {
            Some(index) => {
                self.queue.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn poll(&mut self, now: Duration) -> Vec<T> {
        let due = self
            .queue
            .partition_point(|scheduled| scheduled.deadline <= now);
        self.queue
            .drain(..due)
            .map(|scheduled| scheduled.task)
            .collect()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.first().map(|scheduled| scheduled.deadline)
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.queue.iter().any(|scheduled| scheduled.handle == handle)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

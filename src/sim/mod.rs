//! A discrete time model of two processors fed from two task queues, with a stack of deferred
//! tasks that either processor may pick up.

mod tests;

use std::fmt::{self, Display, Formatter};

use crate::queue::Queue;
use crate::stack::Stack;

/// The last tick of the demonstration run. Ticks are numbered from zero.
pub const DEMO_LAST_TICK: usize = 10;

/// The demonstration tasks with their processing times. The first six start in the first queue.
pub const DEMO_TASKS: [(&str, u32); 12] = [
    ("T1", 3), ("T2", 5), ("T3", 2), ("T4", 4), ("T5", 6), ("T6", 3),
    ("T7", 7), ("T8", 2), ("T9", 1), ("T10", 4), ("T11", 3), ("T12", 5),
];

const PROCESSORS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    /// The number of ticks of work left.
    pub time: u32,
}

impl Task {
    pub fn new(name: impl Into<String>, time: u32) -> Task {
        Task { name: name.into(), time }
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} left)", self.name, self.time)
    }
}

/// The state of the system at the end of a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub tick: usize,
    /// The number of tasks waiting in each queue.
    pub queued: [usize; PROCESSORS],
    /// The task each processor is still working on.
    pub running: [Option<Task>; PROCESSORS],
    /// The tasks that finished during this tick.
    pub completed: Vec<String>,
    /// The number of deferred tasks.
    pub deferred: usize,
}

impl Display for TickReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tick {}", self.tick)?;
        for (index, queued) in self.queued.iter().enumerate() {
            writeln!(f, "F{}: {queued} waiting", index + 1)?;
        }
        for (index, running) in self.running.iter().enumerate() {
            match running {
                Some(task) => writeln!(f, "P{}: busy with {task}", index + 1)?,
                None => writeln!(f, "P{}: free", index + 1)?,
            }
        }
        writeln!(f, "S: {} deferred", self.deferred)?;
        if !self.completed.is_empty() {
            writeln!(f, "Completed: {}", self.completed.join(", "))?;
        }
        Ok(())
    }
}

/// Two processors, each with its own queue, sharing a stack of deferred tasks.
///
/// On every tick each free processor first takes the top deferred task, or failing that the
/// front of its own queue. Every busy processor then does one tick of work on its task and frees
/// itself once the task has none left.
#[derive(Debug)]
pub struct Simulation {
    queues: [Queue<Task>; PROCESSORS],
    deferred: Stack<Task>,
    running: [Option<Task>; PROCESSORS],
    tick: usize,
}

impl Simulation {
    pub const fn new() -> Simulation {
        Simulation {
            queues: [Queue::new(), Queue::new()],
            deferred: Stack::new(),
            running: [None, None],
            tick: 0,
        }
    }

    /// Creates a simulation with the demonstration tasks loaded.
    pub fn demo() -> Simulation {
        let mut simulation = Simulation::new();
        for (index, (name, time)) in DEMO_TASKS.into_iter().enumerate() {
            // Only two queues, so this can't fail.
            let _ = simulation.submit(index / 6, Task::new(name, time));
        }
        simulation
    }

    /// Adds `task` to the back of the queue feeding `processor`. The task is handed back if there
    /// is no such processor.
    pub fn submit(&mut self, processor: usize, task: Task) -> Result<(), Task> {
        match self.queues.get_mut(processor) {
            Some(queue) => {
                queue.enqueue(task);
                Ok(())
            },
            None => Err(task),
        }
    }

    /// Pushes `task` onto the deferred stack, ahead of every queued task.
    pub fn defer(&mut self, task: Task) {
        self.deferred.push(task);
    }

    /// The number of ticks simulated so far.
    pub const fn tick(&self) -> usize {
        self.tick
    }

    /// Returns true once every queue, the stack and both processors are empty.
    pub fn is_idle(&self) -> bool {
        self.deferred.is_empty()
            && self.queues.iter().all(Queue::is_empty)
            && self.running.iter().all(Option::is_none)
    }

    pub fn step(&mut self) -> TickReport {
        for (slot, queue) in self.running.iter_mut().zip(self.queues.iter_mut()) {
            if slot.is_none() {
                *slot = self.deferred.pop().or_else(|| queue.dequeue());
            }
        }

        let mut completed = Vec::new();
        for slot in self.running.iter_mut() {
            if let Some(task) = slot {
                task.time = task.time.saturating_sub(1);
                if task.time == 0
                    && let Some(task) = slot.take()
                {
                    completed.push(task.name);
                }
            }
        }

        let report = TickReport {
            tick: self.tick,
            queued: [self.queues[0].len(), self.queues[1].len()],
            running: self.running.clone(),
            completed,
            deferred: self.deferred.len(),
        };
        self.tick += 1;
        report
    }

    /// Runs `ticks` steps, returning the report of each.
    pub fn run(&mut self, ticks: usize) -> Vec<TickReport> {
        (0..ticks).map(|_| self.step()).collect()
    }
}

impl Default for Simulation {
    fn default() -> Simulation {
        Simulation::new()
    }
}

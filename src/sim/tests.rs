#![cfg(test)]

use super::*;

fn completions(reports: &[TickReport]) -> Vec<(usize, Vec<String>)> {
    reports.iter()
        .filter(|report| !report.completed.is_empty())
        .map(|report| (report.tick, report.completed.clone()))
        .collect()
}

#[test]
fn test_demo_run() {
    let mut simulation = Simulation::demo();
    let reports = simulation.run(DEMO_LAST_TICK + 1);

    assert_eq!(reports.len(), 11);
    assert_eq!(
        completions(&reports),
        vec![
            (2, vec!["T1".to_owned()]),
            (6, vec!["T7".to_owned()]),
            (7, vec!["T2".to_owned()]),
            (8, vec!["T8".to_owned()]),
            (9, vec!["T3".to_owned(), "T9".to_owned()]),
        ],
        "Tasks should complete once their time has been worked off."
    );

    let last = &reports[DEMO_LAST_TICK];
    assert_eq!(last.tick, DEMO_LAST_TICK);
    assert_eq!(last.queued, [2, 2]);
    assert_eq!(last.running, [Some(Task::new("T4", 3)), Some(Task::new("T10", 3))]);
    assert_eq!(last.deferred, 0);
    assert_eq!(simulation.tick(), DEMO_LAST_TICK + 1);
}

#[test]
fn test_processors_start_on_first_tick() {
    let mut simulation = Simulation::demo();
    let report = simulation.step();

    assert_eq!(report.tick, 0);
    assert_eq!(report.queued, [5, 5], "Each processor takes from its own queue.");
    assert_eq!(report.running, [Some(Task::new("T1", 2)), Some(Task::new("T7", 6))]);
    assert!(report.completed.is_empty());
}

#[test]
fn test_deferred_tasks_go_first() {
    let mut simulation = Simulation::demo();
    simulation.defer(Task::new("T0", 1));

    let report = simulation.step();
    assert_eq!(report.completed, vec!["T0".to_owned()], "The deferred task should run before T1.");
    assert_eq!(report.queued, [6, 5]);
    assert_eq!(report.running, [None, Some(Task::new("T7", 6))]);

    let report = simulation.step();
    assert_eq!(report.running[0], Some(Task::new("T1", 2)));
}

#[test]
fn test_deferred_stack_is_lifo() {
    let mut simulation = Simulation::new();
    simulation.defer(Task::new("A", 2));
    simulation.defer(Task::new("B", 2));
    simulation.defer(Task::new("C", 2));

    let report = simulation.step();
    assert_eq!(report.running, [Some(Task::new("C", 1)), Some(Task::new("B", 1))]);
    assert_eq!(report.deferred, 1);
}

#[test]
fn test_runs_until_idle() {
    let mut simulation = Simulation::new();
    assert!(simulation.is_idle());
    assert_eq!(simulation.submit(1, Task::new("X", 2)), Ok(()));
    assert_eq!(simulation.submit(2, Task::new("Y", 1)), Err(Task::new("Y", 1)));
    assert!(!simulation.is_idle());

    let reports = simulation.run(3);
    assert_eq!(reports[0].running, [None, Some(Task::new("X", 1))]);
    assert_eq!(reports[1].completed, vec!["X".to_owned()]);
    assert!(simulation.is_idle());
    assert!(reports[2].completed.is_empty());
}

#[test]
fn test_report_display() {
    let mut simulation = Simulation::demo();
    let report = simulation.run(3).remove(2);
    assert_eq!(
        report.to_string(),
        "Tick 2\nF1: 5 waiting\nF2: 5 waiting\nP1: free\nP2: busy with T7 (4 left)\nS: 0 deferred\n\
        Completed: T1\n"
    );
}

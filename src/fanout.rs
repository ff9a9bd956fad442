//! Concurrent per-controller dispatch with a full join barrier.
//!
//! Both run phases push the same command to every controller at once: the
//! initialization sequence and each timeline tick. [`fan_out`] is the single
//! primitive behind both — it runs one action per controller on its own
//! scoped thread and returns only after every action has finished, however
//! it finished. Failure handling belongs to the action itself; the executor
//! aggregates nothing.

use std::thread;

/// Run `action` once per controller, all in parallel, and wait for all of
/// them.
///
/// Every controller gets its own scoped thread and an exclusive `&mut`
/// borrow, so actions never contend on a single handle. The call is a full
/// join barrier: it returns after all actions have completed, never after
/// the first failure or the first success. Each invocation spawns and fully
/// drains its own cohort of threads, so calling this in a tight loop leaks
/// nothing between calls.
pub fn fan_out<C, F>(controllers: &mut [C], action: F)
where
    C: Send,
    F: Fn(&mut C) + Sync,
{
    let action = &action;
    thread::scope(|scope| {
        for controller in controllers.iter_mut() {
            scope.spawn(move || action(controller));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct Probe {
        id: usize,
        failing: bool,
    }

    #[test]
    fn test_every_controller_is_attempted_despite_failures() {
        let attempts = AtomicUsize::new(0);
        let failures = AtomicUsize::new(0);

        let mut probes: Vec<Probe> = (0..8)
            .map(|id| Probe {
                id,
                failing: id % 2 == 0,
            })
            .collect();

        fan_out(&mut probes, |probe| {
            attempts.fetch_add(1, Ordering::SeqCst);
            if probe.failing {
                failures.fetch_add(1, Ordering::SeqCst);
            }
        });

        // All 8 attempted, and the call returned only after all completed,
        // not after the 4 failures
        assert_eq!(attempts.load(Ordering::SeqCst), 8);
        assert_eq!(failures.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_join_barrier_waits_for_slowest_action() {
        let completed = AtomicUsize::new(0);
        let mut probes: Vec<Probe> = (0..4)
            .map(|id| Probe { id, failing: false })
            .collect();

        fan_out(&mut probes, |probe| {
            if probe.id == 3 {
                std::thread::sleep(Duration::from_millis(50));
            }
            completed.fetch_add(1, Ordering::SeqCst);
        });

        // The barrier has returned, so even the deliberately slow action
        // must have finished
        assert_eq!(completed.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_actions_get_exclusive_mutable_access() {
        let mut counters = vec![0u32; 6];
        fan_out(&mut counters, |counter| {
            *counter += 1;
        });
        assert_eq!(counters, vec![1; 6]);
    }

    #[test]
    fn test_empty_collection_is_a_no_op() {
        let mut none: Vec<Probe> = Vec::new();
        fan_out(&mut none, |_| panic!("action must not run"));
    }

    #[test]
    fn test_repeated_invocations_drain_cleanly() {
        let attempts = AtomicUsize::new(0);
        let mut probes: Vec<Probe> = (0..3)
            .map(|id| Probe { id, failing: false })
            .collect();

        for _ in 0..100 {
            fan_out(&mut probes, |_| {
                attempts.fetch_add(1, Ordering::SeqCst);
            });
        }

        assert_eq!(attempts.load(Ordering::SeqCst), 300);
    }
}

use std::time::{Duration, Instant};

/// Runs `f` once and returns its result together with the elapsed wall-clock time.
pub fn measure<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let started = Instant::now();
    let result = f();
    (result, started.elapsed())
}

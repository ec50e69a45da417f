//! Single-threaded runtime for the countdown session

use std::{future::Future, io};

use tokio::runtime::{Builder, Runtime};

/// Build the current-thread runtime every tick and command runs on
pub fn build_runtime() -> io::Result<Runtime> {
    Builder::new_current_thread().enable_all().build()
}

/// Drive `future` to completion, then shut the runtime down without waiting
/// on blocking work such as a stdin read that only returns on the next line
pub fn run_to_completion<F: Future>(future: F) -> io::Result<F::Output> {
    let runtime = build_runtime()?;
    let output = runtime.block_on(future);
    runtime.shutdown_background();
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn returns_the_future_output() {
        assert_eq!(run_to_completion(async { 7 }).unwrap(), 7);
    }

    #[test]
    fn shutdown_does_not_wait_for_blocked_readers() {
        let started = Instant::now();
        let output = run_to_completion(async {
            let _reader = tokio::task::spawn_blocking(|| std::thread::sleep(Duration::from_secs(10)));
            "done"
        })
        .unwrap();

        assert_eq!(output, "done");
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}

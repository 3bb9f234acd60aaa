//! Native driver for reactive code in tests: a root owner plus the futures
//! executor's thread-local pool.

use any_spawner::Executor;
use leptos::reactive::owner::Owner;

/// Run `f` under a fresh reactive owner.
pub(crate) fn run_reactive<R>(f: impl FnOnce() -> R) -> R {
    let _ = Executor::init_futures_executor();
    Owner::new().with(f)
}

/// Poll spawned effects and tasks until none can make progress.
pub(crate) fn settle() {
    Executor::poll_local();
}

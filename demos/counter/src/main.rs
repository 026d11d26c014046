use anyhow::Result;
use vessel_core::{Store, store};

struct Counter {
    state: Store<i64>,
}

impl Counter {
    fn new() -> Self {
        Self { state: store(0) }
    }

    fn increment(&self) -> Result<()> {
        Ok(self.state.update(|n| n + 1)?)
    }

    fn decrement(&self) -> Result<()> {
        Ok(self.state.update(|n| n - 1)?)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let counter = Counter::new();
    counter.state.enable_debug();

    let sub = counter
        .state
        .subscribe(|n| log::info!("counter is now {n}"))?;

    println!("state: {}", counter.state.get()); // 0
    counter.increment()?;
    println!("state: {}", counter.state.get()); // 1
    counter.decrement()?;
    println!("state: {}", counter.state.get()); // 0

    sub.cancel();
    counter.state.close();
    Ok(())
}

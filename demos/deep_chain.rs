//! Deep wrapper-chain benchmark.
//!
//! Composes one leaf under a deep chain of state-bearing wrappers and drives
//! it with the tick counter, mirroring a grid cell re-rendered on every
//! update. Switch the factory line between `impure`, `pure`, and `squashing`
//! to compare composition styles; run with `--features render-stats` to see
//! executed/memoized/wasted counts per pass.

use std::time::Duration;

use lamina::prelude::*;

const WRAPPERS_PER_ITEM: usize = 40;
const UPDATES: u64 = 20;
const PERIOD_MS: u64 = 1000;

fn main() -> Result<(), ChainError> {
    let factories: Vec<Wrapper> = (0..WRAPPERS_PER_ITEM)
        .map(|i| impure(i.to_string()))
        .collect();
    let root = compose(factories, item());

    Driver::new(root)
        .ticks(UPDATES)
        .period(Duration::from_millis(PERIOD_MS))
        .run()
}

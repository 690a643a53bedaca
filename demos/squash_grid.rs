//! Grid render benchmark over a squashed chain.
//!
//! One composed chain is shared by every cell of the grid, the way a single
//! component definition is reused across a list. Most cells receive a
//! constant content value; a sparse subset receives the advancing counter,
//! so with pure wrappers only those cells would re-render.

use lamina::prelude::*;

const WRAPPERS_PER_ITEM: usize = 40;
const GRID_SIZE: usize = 22;
const UPDATES: u64 = 20;

fn main() -> Result<(), ChainError> {
    env_logger::init();

    let factories: Vec<Wrapper> = (0..WRAPPERS_PER_ITEM)
        .map(|i| squashing(i.to_string()))
        .collect();
    let root = compose(factories, item());

    for counter in 0..UPDATES {
        for x in 0..GRID_SIZE {
            for y in 0..GRID_SIZE {
                let content = if (x * GRID_SIZE + y) % 50 == 0 {
                    counter as i64
                } else {
                    0
                };
                let node = root.render(&Attributes::new().with(CONTENT, content))?;
                debug_assert_eq!(node.depth(), 1);
            }
        }
        log::info!("pass {} rendered {} cells", counter, GRID_SIZE * GRID_SIZE);
    }

    Ok(())
}

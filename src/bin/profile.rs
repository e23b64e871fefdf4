use std::time::Instant;

use cellmaze::{
    Grid,
    generators::{GenerationOptions, Generator, generate_maze},
    logging::{LOG_DIR, init_tracing},
};

fn main() -> std::io::Result<()> {
    let _guard = init_tracing(LOG_DIR, "profile.log");

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(10);

    let side = u8::MAX as u16;
    for generator in Generator::ALL {
        let started = Instant::now();
        for i in 0..num_iters {
            let mut grid = Grid::with_neighbors(side, side);
            generate_maze(&mut grid, generator, &GenerationOptions::seeded(i as u64));
        }
        let elapsed = started.elapsed();
        println!(
            "{}: {} runs on {}x{} in {:?} ({:?} per run)",
            generator,
            num_iters,
            side,
            side,
            elapsed,
            elapsed / num_iters.max(1) as u32
        );
    }
    Ok(())
}

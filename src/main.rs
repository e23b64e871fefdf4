use cellmaze::{
    DisjointSet, Grid,
    generators::{GenerationOptions, Generator, generate_maze},
    logging::{LOG_DIR, init_tracing},
};

/// Largest accepted width or height.
const MAX_SIDE: u16 = 1024;

fn main() -> std::io::Result<()> {
    let _guard = init_tracing(LOG_DIR, "cellmaze.log");

    let mut input = String::new();
    println!("Enter maze dimensions (width height). Maximum size is {MAX_SIDE}x{MAX_SIDE}:");
    std::io::stdin().read_line(&mut input)?;

    // Parse the input dimensions
    let dims = input
        .split_whitespace()
        .take(2)
        .filter_map(|s| s.parse::<u16>().ok())
        .collect::<Vec<_>>();

    if dims.len() != 2 {
        eprintln!("Please enter two valid numbers for width and height.");
        return Ok(());
    }

    let (width, height) = (dims[0], dims[1]);
    if width == 0 || height == 0 || width > MAX_SIDE || height > MAX_SIDE {
        eprintln!("Width and height must be between 1 and {MAX_SIDE}.");
        return Ok(());
    }

    // Let user select the algorithm
    println!("Select maze generation algorithm:");
    for (i, generator) in Generator::ALL.iter().enumerate() {
        println!("{}. {}", i + 1, generator);
    }
    input.clear();
    std::io::stdin().read_line(&mut input)?;
    let Some(generator) = input
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| Generator::ALL.get(i).copied())
    else {
        eprintln!("Invalid selection.");
        return Ok(());
    };

    let seed = match std::env::var("MAZE_SEED") {
        Ok(val) => match val.parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                eprintln!("Ignoring MAZE_SEED={val:?}, expected an unsigned integer.");
                None
            }
        },
        Err(_) => None,
    };
    tracing::info!(
        "[main] Generating {}x{} maze with {} (seed {:?})",
        width,
        height,
        generator,
        seed
    );

    let mut grid = Grid::with_neighbors(width, height);
    let options = GenerationOptions {
        seed,
        ..Default::default()
    };
    let stats = generate_maze(&mut grid, generator, &options);

    println!(
        "Generated {}x{} maze with {}: {} passages, {} set(s), {} walls examined.",
        width,
        height,
        generator,
        grid.passage_count(),
        DisjointSet::default().set_count(&grid),
        stats.attempts
    );
    Ok(())
}

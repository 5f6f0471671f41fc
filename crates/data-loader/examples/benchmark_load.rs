use data_loader::MovieCatalog;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("data/movie_dataset.csv");

    println!("Loading movie dataset...\n");

    let start = Instant::now();
    let catalog = MovieCatalog::load_from_file(path)
        .expect("Failed to load dataset");
    let elapsed = start.elapsed();

    let with_cast = catalog.movies().iter().filter(|m| !m.cast.is_empty()).count();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", catalog.len());
    println!("Movies with cast: {}", with_cast);
    println!("\nPerformance: {:.0} rows/second",
             catalog.len() as f64 / elapsed.as_secs_f64());
}

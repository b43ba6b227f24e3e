extern crate courserec;

use std::path::Path;

use anyhow::{bail, Context, Result};

use courserec::index::CourseIndex;
use courserec::io;

/// Converts the offline job's tab-delimited exports into the bincode
/// artifacts served at runtime. Refuses misaligned inputs so corrupt data
/// never reaches the recommender.
fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        bail!("usage: build_index <catalog.tsv> <similarity.tsv> <output-dir>");
    }
    let catalog_input = Path::new(&args[1]);
    let similarity_input = Path::new(&args[2]);
    let output_dir = Path::new(&args[3]);

    let courses = io::read_catalog(catalog_input)
        .with_context(|| format!("reading catalog from {}", catalog_input.display()))?;
    let similarity = io::read_similarity(similarity_input)
        .with_context(|| format!("reading similarity matrix from {}", similarity_input.display()))?;

    // Validates matrix dimensions against the catalog before anything is written.
    let index = CourseIndex::from_parts(courses.clone(), similarity.clone())?;

    std::fs::create_dir_all(output_dir)?;
    let catalog_output = output_dir.join("courses.bin");
    let similarity_output = output_dir.join("similarity.bin");
    io::write_catalog(&catalog_output, &courses)?;
    io::write_similarity(&similarity_output, &similarity)?;

    println!(
        "wrote {} courses to {} and a {dim}x{dim} matrix to {}",
        index.len(),
        catalog_output.display(),
        similarity_output.display(),
        dim = similarity.dim(),
    );
    Ok(())
}

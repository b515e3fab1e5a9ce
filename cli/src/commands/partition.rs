use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use rand::seq::IteratorRandom;

use districter::{build_region, GraphStore, PartitionError, Region, Tract, TractId};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::PartitionArgs) -> Result<()> {
    let out_path = &args.output.clone().unwrap_or("./districts.csv".into());

    println!("[partition] loading graph from {}", args.graph.display());
    let file = File::open(&args.graph)
        .with_context(|| format!("failed to open {}", args.graph.display()))?;
    let tracts: Vec<Tract> = serde_json::from_reader(BufReader::new(file))
        .context("graph file is not a JSON array of tracts")?;

    let mut store = GraphStore::new(tracts);
    println!(
        "[partition] {} tracts, total population {}",
        store.len(),
        store.total_population()
    );

    if args.validate {
        store.validate().context("adjacency validation failed")?;
    }

    let mut rng = rand::rng();
    let mut next_seed: Option<TractId> = args.seed.as_deref().map(TractId::from);

    let mut districts: Vec<Region> = Vec::new();
    let mut fragments: Vec<Region> = Vec::new();

    // Every build claims at least its seed, so this loop runs at most once
    // per tract.
    while !store.remaining().is_empty() {
        let seed = match next_seed.take() {
            Some(seed) => seed,
            None => store
                .remaining()
                .iter()
                .choose(&mut rng)
                .cloned()
                .context("unclaimed pool is empty")?,
        };

        match build_region(&mut store, &seed, args.target) {
            Ok(region) => {
                println!("[partition] district {}: {}", districts.len() + 1, region);
                districts.push(region);
            }
            // An undersized component: keep it as a leftover fragment
            // rather than discarding the claimed tracts.
            Err(PartitionError::FrontierExhausted { region, .. }) => {
                println!("[partition] fragment: {region}");
                fragments.push(region);
            }
            Err(err) => return Err(err.into()),
        }
    }

    println!(
        "[partition] done: {} districts, {} fragments",
        districts.len(),
        fragments.len()
    );

    write_assignments(out_path, &districts, &fragments)?;
    println!("[partition] wrote assignments to {}", out_path.display());

    if cli.verbose > 0 {
        for (i, district) in districts.iter().enumerate() {
            eprintln!("[partition] district {} -> {}", i + 1, district);
        }
    }

    Ok(())
}

/// Write one `tract_id,district` line per tract. Fragments continue the
/// district numbering after the full districts.
fn write_assignments(path: &Path, districts: &[Region], fragments: &[Region]) -> Result<()> {
    let mut out = BufWriter::new(
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
    );

    writeln!(out, "tract_id,district")?;
    for (number, region) in districts.iter().chain(fragments).enumerate() {
        for id in region.ids() {
            writeln!(out, "{},{}", id, number + 1)?;
        }
    }
    Ok(())
}

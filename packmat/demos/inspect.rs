use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};
use packmat::{
    persist, BandStore, DenseGrid, MatrixStore, PersistError, SparseStore, TextLayout,
    TriangularStore,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Dense,
    Band,
    Triangular,
    Sparse,
}

/// Load a matrix store from its text layout and report its norms
#[derive(Debug, Parser)]
struct Args {
    /// Storage layout of the file
    #[arg(long, value_enum)]
    kind: Kind,

    /// Holder norm order to report alongside the fixed norms
    #[arg(long, default_value_t = 3.0)]
    p: f64,

    /// File written by `persist::save`
    path: PathBuf,
}

fn report<M>(args: &Args) -> Result<(), PersistError>
where
    M: MatrixStore<Element = f64> + TextLayout,
{
    let store: M = persist::load(&args.path)?;
    let (rows, cols) = store.dimensions();
    info!("loaded {rows}x{cols} {:?} store from {}", args.kind, args.path.display());

    println!("dimensions:   {rows} x {cols}");
    println!("stored slots: {}", store.values().len());
    println!("first norm:   {}", store.first_norm());
    println!("inf norm:     {}", store.infinity_norm());
    println!("second norm:  {}", store.second_norm());
    println!("holder({}):   {}", args.p, store.holder_norm(args.p)?);
    Ok(())
}

fn main() -> Result<(), PersistError> {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Debug)
        .filter(Some("packmat"), LevelFilter::Debug)
        .parse_default_env()
        .init();

    let args = Args::parse();
    match args.kind {
        Kind::Dense => report::<DenseGrid<f64>>(&args),
        Kind::Band => report::<BandStore<f64>>(&args),
        Kind::Triangular => report::<TriangularStore<f64>>(&args),
        Kind::Sparse => report::<SparseStore<f64>>(&args),
    }
}

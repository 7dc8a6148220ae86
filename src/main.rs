use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use chem_adapters::{find_archives, HttpFetcher, OrdArchiveLoader};
use chem_core::{scan_archives, ScanQuery};
use chem_persistence::{backfill_step_counts, JsonIndexStore, StorageConfig};
use chemsynth_rust::{generate_curated, ingest_mock, ingest_ord, write_scan_report, AppConfig, AppError, IngestOutcome, CONFIG};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "chemsynth", version, about = "Ingesta y normalización del corpus de síntesis")]
struct Cli {
    #[command(flatten)]
    storage: StorageArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct StorageArgs {
    /// Raíz pública que contiene `data/` (CHEMSYNTH_PUBLIC_DIR).
    #[arg(long, global = true)]
    public_dir: Option<PathBuf>,
    /// Subárbol de registros generados (CHEMSYNTH_IMPORT_SUBDIR).
    #[arg(long, global = true)]
    import_subdir: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Escribe el registro fijo de prueba y reconcilia el índice.
    IngestMock,
    /// Genera las 100 reacciones del catálogo curado.
    GenerateCurated {
        /// Semilla del generador de pasos (CHEMSYNTH_SEED).
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Descarga (si falta) el dataset ORD y lo ingesta.
    IngestOrd {
        /// URL del dataset `.pb.gz` (CHEMSYNTH_DATASET_URL).
        #[arg(long)]
        url: Option<String>,
        /// Máximo de registros aceptados (CHEMSYNTH_ORD_LIMIT).
        #[arg(long)]
        limit: Option<usize>,
        /// Caché de descargas (CHEMSYNTH_DOWNLOAD_DIR).
        #[arg(long)]
        download_dir: Option<PathBuf>,
        /// Timeout de la descarga en segundos.
        #[arg(long, default_value_t = 300)]
        timeout_secs: u64,
    },
    /// Rellena `step_count` en el índice a partir de los registros.
    BackfillSteps,
    /// Busca reacciones de prostaglandinas en archivos `*.pb.gz`.
    Scan {
        /// Directorio con los archivos (por defecto, la caché de descargas).
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Palabras clave adicionales.
        #[arg(long = "keyword")]
        keywords: Vec<String>,
        /// Patrones de estructura adicionales.
        #[arg(long = "pattern")]
        patterns: Vec<String>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn resolve_config(args: &StorageArgs) -> AppConfig {
    let mut config = (*CONFIG).clone();
    if args.public_dir.is_some() || args.import_subdir.is_some() {
        let public_dir = args.public_dir.clone().unwrap_or_else(|| config.storage.public_dir.clone());
        let import_subdir = args.import_subdir.clone().unwrap_or_else(|| config.storage.import_subdir.clone());
        config.storage = StorageConfig::new(public_dir, import_subdir);
    }
    config
}

fn print_outcome(outcome: &IngestOutcome) {
    match &outcome.summary {
        Some(s) => println!("[{}] {} registros escritos; índice: {} conservadas, {} reemplazadas, {} nuevas",
                            outcome.run, outcome.generated, s.kept, s.dropped, s.added),
        None => println!("[{}] dataset ilegible: 0 registros, índice sin cambios", outcome.run),
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = resolve_config(&cli.storage);
    match cli.command {
        Commands::IngestMock => print_outcome(&ingest_mock(&config)?),
        Commands::GenerateCurated { seed } => {
            if let Some(seed) = seed {
                config.seed = seed;
            }
            print_outcome(&generate_curated(&config)?);
        }
        Commands::IngestOrd { url, limit, download_dir, timeout_secs } => {
            if let Some(url) = url {
                config.dataset_url = url;
            }
            if let Some(limit) = limit {
                config.ord_limit = limit;
            }
            if let Some(dir) = download_dir {
                config.download_dir = dir;
            }
            let fetcher = HttpFetcher::new(Duration::from_secs(timeout_secs))?;
            print_outcome(&ingest_ord(&config, &fetcher, &OrdArchiveLoader)?);
        }
        Commands::BackfillSteps => {
            let store = JsonIndexStore::new(config.storage.index_path());
            let updated = backfill_step_counts(&config.storage, &store)?;
            println!("{updated} entradas actualizadas con step_count");
        }
        Commands::Scan { dir, keywords, patterns } => {
            let dir = dir.unwrap_or_else(|| config.download_dir.clone());
            if !dir.is_dir() {
                return Err(AppError::Config(format!("{} no es un directorio", dir.display())));
            }
            let mut query = ScanQuery::prostaglandin();
            query.keywords.extend(keywords);
            query.structure_patterns.extend(patterns);
            let archives = find_archives(&dir)?;
            let scans = scan_archives(&archives, &OrdArchiveLoader, &query);
            write_scan_report(&mut io::stdout().lock(), &query, &scans)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

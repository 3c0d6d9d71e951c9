use camino::Utf8PathBuf;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[clap(about = "Generate the Grafana dashboard for a SkyhookDM cluster")]
struct Args {
    /// JSON file describing the cluster nodes.
    topology: Utf8PathBuf,

    /// Destination file, or a directory to write `spark_rados.json` into.
    output: Utf8PathBuf,

    /// Port to use for Prometheus.
    #[clap(long, value_name = "number")]
    prometheus_port: Option<u16>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    skydash::generate_from_file(&args.topology, &args.output, args.prometheus_port)?;

    Ok(())
}

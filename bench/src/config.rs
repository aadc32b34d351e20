use clap::{Args, ValueEnum};

pub const DEFAULT_NODES: u64 = 100_000;
pub const MIN_NODES: u64 = 2;
pub const MAX_NODES: u64 = 50_000_000;
pub const DEFAULT_SEED: u64 = 42;

/// Synthetic topology to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Run every generator in turn
    All,
    /// Fractal branching tree (deep paths)
    Lsystem,
    /// Preferential attachment via edge sampling (hub-and-spoke)
    Scalefree,
    /// Watts-Strogatz ring lattice + shortcuts
    Smallworld,
    /// Erdos-Renyi uniform random edges
    Random,
    /// Two dense cliques connected by a thin bridge
    Barbell,
    /// Diffusion-limited aggregation (organic branching)
    Dla,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Benchmark settings. Each can also come from the environment.
#[derive(Debug, Clone, Args)]
pub struct RunConfig {
    /// Topology to generate
    #[arg(long, value_enum, default_value_t = Mode::All)]
    pub mode: Mode,

    /// Target vertex count per generated graph
    #[arg(long, env = "SIMPLE_GRAPH_NODES", default_value_t = DEFAULT_NODES)]
    pub nodes: u64,

    /// Seed for the deterministic generators
    #[arg(long, env = "SIMPLE_GRAPH_SEED", default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Report format
    #[arg(long, env = "SIMPLE_GRAPH_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl RunConfig {
    /// Check settings against their bounds before any graph is built.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(MIN_NODES..=MAX_NODES).contains(&self.nodes) {
            anyhow::bail!(
                "nodes must be between {} and {}, got {}",
                MIN_NODES,
                MAX_NODES,
                self.nodes
            );
        }
        Ok(())
    }
}

use clap::ArgAction;
use neuronet_core::LoadOptions;

pub const DEFAULT_MAX_MEMORY_MB: usize = 4096;

pub const DEFAULT_BFS_DEPTH: u32 = 3;

/// Settings shared by every subcommand.
#[derive(clap::Args, Debug, Clone)]
pub struct Settings {
    /// Refuse graphs whose CSR arrays would need more than this many MB
    #[arg(
        long,
        env = "NEURONET_MAX_MEMORY_MB",
        default_value_t = DEFAULT_MAX_MEMORY_MB,
        global = true
    )]
    pub max_memory_mb: usize,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Settings {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            max_memory_mb: Some(self.max_memory_mb),
        }
    }

    /// Default log directive when RUST_LOG is unset.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

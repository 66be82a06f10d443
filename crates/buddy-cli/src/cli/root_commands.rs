use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Show the companion (default).
    Status,
    /// Create a new companion egg.
    New(NewArgs),
    /// Feed the companion back to full health.
    Feed,
    /// Hatch the egg.
    Hatch,
    /// Delete the saved companion.
    Release,
    /// Print where the companion is stored.
    Path,
}

#[derive(Clone, Debug, Args)]
pub struct NewArgs {
    /// Replace an existing companion.
    #[arg(long)]
    pub force: bool,
}

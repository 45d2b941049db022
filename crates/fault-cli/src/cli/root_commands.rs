use clap::{Args, Subcommand};
use fault_core::{ErrorKind, Operation};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List operations and the kind each one signals.
    List,
    /// Invoke one operation through the boundary and print what the caller sees.
    Invoke(InvokeArgs),
    /// Signal a kind directly.
    Emit(EmitArgs),
    /// Invoke operations repeatedly and check determinism and distinctness.
    Probe(ProbeArgs),
    /// Decode and verify a signal envelope.
    Decode(DecodeArgs),
    /// Print a JSON Schema, or list registered schema names.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct InvokeArgs {
    /// Operation name (op0..op3).
    pub operation: Operation,
    /// Print every attribute of the signal.
    #[arg(long)]
    pub inspect: bool,
}

#[derive(Clone, Debug, Args)]
pub struct EmitArgs {
    /// Kind name, class name or code (error2, Error2, 2).
    pub kind: ErrorKind,
}

#[derive(Clone, Debug, Args)]
pub struct ProbeArgs {
    /// Operations to probe; defaults to the configured list.
    pub operations: Vec<Operation>,
    /// Rounds to run; overrides `probe.repeat`.
    #[arg(short, long)]
    pub repeat: Option<u32>,
    /// Spread invocations over a thread pool.
    #[arg(long)]
    pub parallel: bool,
    /// Surface these kinds as RuntimeError; overrides `boundary.runtime_kinds`.
    #[arg(long = "runtime", value_delimiter = ',')]
    pub runtime_kinds: Vec<ErrorKind>,
}

#[derive(Clone, Debug, Args)]
pub struct DecodeArgs {
    /// Envelope JSON, or `-` to read stdin.
    pub payload: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name; omit to list all names.
    pub type_name: Option<String>,
}

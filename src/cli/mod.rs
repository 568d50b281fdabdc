// CLI module for inference-gateway

use clap::Parser;

/// inference-gateway - cost-aware inference router with a response cache
#[derive(Parser, Debug)]
#[command(name = "inference-gateway", version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML config file (default: ~/.inference-gateway/config.toml)
    #[arg(short, long, env = "INFERENCE_GATEWAY_CONFIG")]
    pub config: Option<String>,

    /// Override the bind host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the bind port
    #[arg(long)]
    pub port: Option<u16>,

    /// Resolve a single message, print the result as JSON and exit
    #[arg(short, long)]
    pub message: Option<String>,

    /// Use the accelerated tier for --message
    #[arg(long, requires = "message")]
    pub boost: bool,

    /// Throughput hint (TFLOPS) for --message
    #[arg(long, requires = "message")]
    pub throughput: Option<f64>,
}

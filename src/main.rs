//! maskedit - replay edit operations against a masked input field

mod cli;

use anyhow::Result;
use clap::Parser;

use maskedit::config::MaskConfig;

use cli::CliArgs;

fn main() -> Result<()> {
    maskedit::tracing::init();

    let args = CliArgs::parse();
    let config = MaskConfig::load();
    let plan = args.into_plan(&config)?;

    let json = plan.json;
    let result = plan.run();
    tracing::info!(rejected = result.rejected, "replay finished");

    let outcome = result.state.outcome();
    if json {
        println!("{}", serde_json::to_string(&outcome)?);
    } else {
        println!("{}", outcome.text);
        println!("value: {}", outcome.value);
        println!("caret: {}", outcome.caret);
        if result.rejected > 0 {
            println!("rejected: {}", result.rejected);
        }
    }

    Ok(())
}

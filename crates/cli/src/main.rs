use clap::Parser;

mod args;
mod render;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = args::Args::parse();
    render::render_command(&args)?;
    Ok(())
}

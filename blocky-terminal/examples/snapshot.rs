/// Example: render one animated rig frame to stdout as plain text
///
/// Usage: cargo run --example snapshot -- [width] [height] [seconds]
use blocky_core::SceneConfig;
use std::env;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let width: usize = args.first().map_or(Ok(80), |s| s.parse())?;
    let height: usize = args.get(1).map_or(Ok(40), |s| s.parse())?;
    let seconds: f64 = args.get(2).map_or(Ok(1.0), |s| s.parse())?;

    let renderer = blocky_terminal::snapshot(SceneConfig::default(), width, height, seconds);
    print!("{}", renderer.to_text());
    Ok(())
}

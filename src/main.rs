use std::path::PathBuf;

use anyhow::bail;
use moodlet::{export_drawing, init_logging, VERSION};

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let mut args = std::env::args_os().skip(1);
    let Some(drawing) = args.next().map(PathBuf::from) else {
        bail!("usage: moodlet <drawing.json> [settings.(json|toml)]");
    };
    let settings = args.next().map(PathBuf::from);

    tracing::debug!("moodlet {} exporting {}", VERSION, drawing.display());

    let payload = export_drawing(&drawing, settings.as_deref())?;
    println!("{}", payload.to_json_pretty()?);

    Ok(())
}

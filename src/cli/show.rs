//! `blogmeta show`: emit the resolved metadata for the site generator.

use std::fs;
use std::io::Write;

use anyhow::Result;

use crate::cli::ShowArgs;
use crate::config::SiteMetadata;
use crate::log;

/// Write the metadata as JSON to `--output` or stdout.
pub fn show_metadata(meta: &SiteMetadata, args: &ShowArgs) -> Result<()> {
    let formatted = meta.to_json(args.pretty)?;

    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("show"; "wrote metadata to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

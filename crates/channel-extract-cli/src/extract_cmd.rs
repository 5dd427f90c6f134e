use channel_extract::{
    ExtractOptions, PageSource, collect_pages_with, render_pages, render_pages_json, write_output,
};
use tracing::debug;

use crate::cli::{Cli, TextFormat};
use crate::shared::{ProgressReporter, fail, open_source, resolve_pages};

/// Extract the selected pages of the input PDF and write them to the output
/// file, replacing whatever was there.
///
/// The output file is not touched unless extraction succeeds.
pub fn run(cli: &Cli) -> Result<(), i32> {
    let paths = cli.paths();
    debug!(input = %paths.input.display(), output = %paths.output.display(), "resolved paths");

    let options = ExtractOptions { layout: cli.layout };
    let pages = {
        let source = open_source(&paths.input, options)?;
        let indices = resolve_pages(cli.pages.as_deref(), source.page_count())?;

        let progress = ProgressReporter::new(indices.len());
        let result = collect_pages_with(&source, &indices, |done| progress.report(done));
        progress.finish();
        result.map_err(fail)?
    };

    let rendered = match cli.format {
        TextFormat::Text => render_pages(&pages),
        TextFormat::Json => render_pages_json(&pages).map_err(fail)?,
    };

    write_output(&paths.output, &rendered).map_err(fail)?;
    println!("Extracted text to {}", paths.output.display());
    Ok(())
}

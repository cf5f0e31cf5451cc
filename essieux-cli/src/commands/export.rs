//! `essieux export`

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use essieux_lib::TableConfig;

use crate::args::ViewArgs;
use crate::commands::build_view;
use crate::commands::load_records;
use crate::error::CliError;

pub fn run(
    args: &ViewArgs,
    out_dir: &Path,
    config: TableConfig,
    out: &mut dyn Write,
) -> Result<PathBuf, CliError> {
    let records = load_records(args.entity, &args.data)?;
    let view = build_view(args, &records, config)?;
    let rows = view.sorted().len();

    let path = view.export().write_to(out_dir)?;
    writeln!(out, "{} lignes exportées vers {}", rows, path.display())?;
    Ok(path)
}

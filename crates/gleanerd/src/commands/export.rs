//! Module for the "export" command.

use super::*;

/// Arguments that can be used for the [`Commands::Export`]
#[derive(Args, Clone)]
pub struct ExportArgs {
  /// Paper index as shown by `gleaner list`
  pub index: usize,

  /// Directory to write to, overriding the configured output directory
  #[arg(long, short)]
  pub output_dir: Option<PathBuf>,
}

/// Function for the [`Commands::Export`] in the CLI.
pub async fn export<I: UserInteraction>(
  interaction: &I,
  gleaner: &Gleaner,
  args: ExportArgs,
) -> Result<PathBuf> {
  let ExportArgs { index, output_dir } = args;
  let paper = find_paper(gleaner, index)?;

  interaction.reply(ResponseContent::Info(&format!("Analyzing {}", paper.name)))?;
  let analysis = gleaner.analyze(&paper).await?;

  let output_dir = output_dir.unwrap_or_else(|| gleaner.config().output_dir.clone());
  let path = export_analysis(&analysis, output_dir)?;
  interaction.reply(ResponseContent::Success(&format!(
    "Exported {} ({} extraction) to {}",
    analysis.analysis_result.paper_title,
    analysis.extraction_source,
    path.display()
  )))?;
  Ok(path)
}

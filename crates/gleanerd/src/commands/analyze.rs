//! Module for the "analyze" command.

use super::*;

/// Arguments that can be used for the [`Commands::Analyze`]
#[derive(Args, Clone)]
pub struct AnalyzeArgs {
  /// Paper index as shown by `gleaner list`
  pub index: usize,

  /// Print the analysis as JSON instead of a report
  #[arg(long)]
  pub json: bool,

  /// Also write the analysis to the output directory
  #[arg(long)]
  pub export: bool,
}

/// Function for the [`Commands::Analyze`] in the CLI.
pub async fn analyze<I: UserInteraction>(
  interaction: &I,
  gleaner: &Gleaner,
  args: AnalyzeArgs,
) -> Result<PaperAnalysis> {
  let AnalyzeArgs { index, json, export } = args;
  let paper = find_paper(gleaner, index)?;

  if !json {
    interaction.reply(ResponseContent::Info(&format!("Analyzing {}", paper.name)))?;
  }
  let analysis = gleaner.analyze(&paper).await?;

  if json {
    interaction.reply(ResponseContent::Json(&serde_json::to_string_pretty(&analysis)?))?;
  } else {
    interaction.reply(ResponseContent::Analysis(&analysis))?;
  }

  if export {
    let path = export_analysis(&analysis, &gleaner.config().output_dir)?;
    if !json {
      interaction
        .reply(ResponseContent::Success(&format!("Analysis exported to {}", path.display())))?;
    }
  }
  Ok(analysis)
}

//! Module for the "batch" command.

use super::*;

/// Arguments that can be used for the [`Commands::Batch`]
#[derive(Args, Clone)]
pub struct BatchArgs {
  /// Print the batch report as JSON instead of a summary
  #[arg(long)]
  pub json: bool,
}

/// Function for the [`Commands::Batch`] in the CLI.
///
/// A run that cannot start still renders a report with status `error` before
/// the error is returned.
pub async fn batch<I: UserInteraction>(
  interaction: &I,
  gleaner: &Gleaner,
  args: BatchArgs,
) -> Result<BatchReport> {
  if !args.json {
    interaction.reply(ResponseContent::Info(&format!(
      "Analyzing papers in {}{}",
      gleaner.config().papers_dir.display(),
      if gleaner.has_model() { "" } else { " (heuristic extraction only)" }
    )))?;
  }

  let (report, failure) = match gleaner.analyze_batch().await {
    Ok(report) => (report, None),
    Err(e) => (BatchReport::fatal(&e), Some(e)),
  };

  if args.json {
    interaction.reply(ResponseContent::Json(&serde_json::to_string_pretty(&report)?))?;
  } else {
    interaction.reply(ResponseContent::Report(&report))?;
  }

  match failure {
    Some(e) => Err(e.into()),
    None => Ok(report),
  }
}

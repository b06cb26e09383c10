//! Module for the "list" command.

use super::*;

/// Function for the [`Commands::List`] in the CLI.
pub async fn list<I: UserInteraction>(interaction: &I, gleaner: &Gleaner) -> Result<Vec<PaperRecord>> {
  let papers = gleaner.scan()?;
  interaction.reply(ResponseContent::Info(&format!(
    "Papers directory: {}",
    gleaner.config().papers_dir.display()
  )))?;
  interaction.reply(ResponseContent::Papers(&papers))?;
  Ok(papers)
}

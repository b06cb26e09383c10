//! Module for the interactive menu.

use super::*;

/// Entries of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
  /// Show the papers table
  List,
  /// Pick and analyze one paper
  Analyze,
  /// Analyze the whole directory
  Batch,
  /// Write the most recent analysis to disk
  ExportLast,
  /// Leave the menu
  Quit,
}

impl MenuItem {
  /// All entries in display order.
  const ALL: [MenuItem; 5] = [Self::List, Self::Analyze, Self::Batch, Self::ExportLast, Self::Quit];

  /// Menu text for the entry.
  fn label(&self) -> &'static str {
    match self {
      Self::List => "List papers",
      Self::Analyze => "Analyze a paper",
      Self::Batch => "Analyze all papers",
      Self::ExportLast => "Export the last analysis",
      Self::Quit => "Quit",
    }
  }
}

/// Function for the [`Commands::Menu`] in the CLI.
///
/// Failures inside one action are reported and the menu continues.
pub async fn menu<I: UserInteraction>(interaction: &I, gleaner: &Gleaner) -> Result<()> {
  let labels = MenuItem::ALL.iter().map(|item| item.label().to_string()).collect::<Vec<_>>();
  let quit = MenuItem::ALL.len() - 1;
  let mut last: Option<PaperAnalysis> = None;

  loop {
    let choice = MenuItem::ALL[interaction.select("What would you like to do?", &labels, quit)?];
    trace!("Menu choice: {choice:?}");

    let outcome = match choice {
      MenuItem::List => list(interaction, gleaner).await.map(|_| ()),
      MenuItem::Analyze => analyze_one(interaction, gleaner).await.map(|analysis| {
        if analysis.is_some() {
          last = analysis;
        }
      }),
      MenuItem::Batch => {
        batch(interaction, gleaner, BatchArgs { json: false }).await.map(|report| {
          if let Some(analysis) = report.analyzed_papers.last() {
            last = Some(analysis.clone());
          }
        })
      },
      MenuItem::ExportLast => export_last(interaction, gleaner, last.as_ref()),
      MenuItem::Quit => return Ok(()),
    };

    if let Err(e) = outcome {
      interaction.reply(ResponseContent::Error(e))?;
    }
  }
}

/// Lets the user pick a paper and analyzes it.
async fn analyze_one<I: UserInteraction>(
  interaction: &I,
  gleaner: &Gleaner,
) -> Result<Option<PaperAnalysis>> {
  let papers = gleaner.scan()?.into_iter().filter(|p| p.is_valid()).collect::<Vec<_>>();
  if papers.is_empty() {
    interaction.reply(ResponseContent::Info(&format!(
      "No supported papers in {}",
      gleaner.config().papers_dir.display()
    )))?;
    return Ok(None);
  }

  let names = papers
    .iter()
    .map(|p| format!("{:>3}  {}", p.index.unwrap_or_default(), p.name))
    .collect::<Vec<_>>();
  let paper = &papers[interaction.select("Which paper?", &names, 0)?];

  interaction.reply(ResponseContent::Info(&format!("Analyzing {}", paper.name)))?;
  let analysis = gleaner.analyze(paper).await?;
  interaction.reply(ResponseContent::Analysis(&analysis))?;
  Ok(Some(analysis))
}

/// Writes `last` to the configured output directory after confirmation.
fn export_last<I: UserInteraction>(
  interaction: &I,
  gleaner: &Gleaner,
  last: Option<&PaperAnalysis>,
) -> Result<()> {
  let Some(analysis) = last else {
    return interaction.reply(ResponseContent::Info("Nothing analyzed yet"));
  };

  let output_dir = &gleaner.config().output_dir;
  if interaction.confirm(&format!(
    "Export the analysis of {} to {}?",
    analysis.paper.name,
    output_dir.display()
  ))? {
    let path = export_analysis(analysis, output_dir)?;
    interaction.reply(ResponseContent::Success(&format!("Exported to {}", path.display())))?;
  }
  Ok(())
}

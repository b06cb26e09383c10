//! Terminal rendering and prompts.
//!
//! Commands talk to the user only through [`UserInteraction`], so the same
//! command code serves both one-shot invocations and the interactive menu.

use dialoguer::{Confirm, Select};
use gleaner::extract::truncate_with_ellipsis;

use super::*;

/// Maximum title length shown in batch summaries.
const SUMMARY_TITLE_CHARS: usize = 50;
/// Number of analyses listed in a batch summary.
const SUMMARY_ANALYSES: usize = 5;

/// Something to show the user.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// The result of analyzing one paper
  Analysis(&'a PaperAnalysis),
  /// The result of a batch run
  Report(&'a BatchReport),
  /// The scanned papers directory
  Papers(&'a [PaperRecord]),
  /// Raw JSON, printed as is
  Json(&'a str),
  /// A completed operation
  Success(&'a str),
  /// Neutral information
  Info(&'a str),
  /// A failure that does not stop the program
  Error(GleanerdError),
}

/// How commands ask questions and report results.
pub trait UserInteraction {
  /// Asks a yes/no question.
  fn confirm(&self, message: &str) -> Result<bool>;
  /// Asks the user to pick one of `items`, returning its position.
  fn select(&self, message: &str, items: &[String], default: usize) -> Result<usize>;
  /// Shows `content`.
  fn reply(&self, content: ResponseContent) -> Result<()>;
}

impl UserInteraction for Cli {
  fn confirm(&self, message: &str) -> Result<bool> {
    if self.accept_defaults {
      return Ok(true);
    }
    Ok(
      Confirm::new()
        .with_prompt(format!("{} {message}", style(PROMPT_PREFIX).yellow()))
        .default(true)
        .interact()?,
    )
  }

  fn select(&self, message: &str, items: &[String], default: usize) -> Result<usize> {
    if self.accept_defaults {
      return Ok(default);
    }
    Ok(
      Select::new()
        .with_prompt(format!("{} {message}", style(PROMPT_PREFIX).yellow()))
        .items(items)
        .default(default)
        .interact()?,
    )
  }

  fn reply(&self, content: ResponseContent) -> Result<()> {
    match content {
      ResponseContent::Analysis(analysis) => display_analysis(analysis),
      ResponseContent::Report(report) => display_report(report),
      ResponseContent::Papers(papers) => display_papers(papers),
      ResponseContent::Json(json) => println!("{json}"),
      ResponseContent::Success(message) => {
        println!("{} {}", style(SUCCESS_PREFIX).green(), style(message).green())
      },
      ResponseContent::Info(message) => println!("{} {message}", style(INFO_PREFIX).blue()),
      ResponseContent::Error(e) => {
        eprintln!("{} {}", style(ERROR_PREFIX).red(), style(e).red())
      },
    }
    Ok(())
  }
}

/// Prints the table of supported papers.
fn display_papers(papers: &[PaperRecord]) {
  let valid = papers.iter().filter(|p| p.is_valid()).collect::<Vec<_>>();
  if valid.is_empty() {
    println!("{} No supported papers found", style(WARNING_PREFIX).yellow());
    return;
  }

  println!("{}", style(format!("{:>5}  {:<6}  {}", "Index", "Format", "Name")).bold());
  for paper in &valid {
    let format = paper.format.map(|f| f.to_string()).unwrap_or_default();
    println!("{:>5}  {:<6}  {}", paper.index.unwrap_or_default(), format, style(&paper.name).white());
  }

  let skipped = papers.len() - valid.len();
  if skipped > 0 {
    println!("{} {skipped} unsupported file(s) skipped", style(INFO_PREFIX).blue());
  }
}

/// Prints every field of an analysis as a tree.
fn display_analysis(analysis: &PaperAnalysis) {
  let result = &analysis.analysis_result;
  println!(
    "{} Analysis of {} ({} extraction)",
    style(SUCCESS_PREFIX).green(),
    style(&analysis.paper.name).white().bold(),
    analysis.extraction_source
  );
  println!("   {} {}", style("Title:").green().bold(), style(&result.paper_title).white());
  println!(
    "   {} {}",
    style("YOLO-related:").green().bold(),
    if analysis.is_yolo_related { "yes" } else { "no" }
  );

  let innovation = &result.innovation_point;
  display_section("Innovation", &[
    ("Core innovation", &innovation.core_innovation),
    ("Value", &innovation.innovation_value),
    ("Pseudo-code", &innovation.pseudo_code),
  ]);

  let math = &result.math_derivation;
  display_section("Math", &[
    ("Key formulas", &math.key_formulas),
    ("Derivation", &math.derivation_steps),
    ("Advantage", &math.math_advantage),
  ]);

  let reproduction = &result.reproduction_steps;
  display_section("Reproduction", &[
    ("Data", &reproduction.data_prep),
    ("Environment", &reproduction.env_config),
    ("Hardware", &reproduction.hardware_req),
    ("Steps", &reproduction.core_steps),
    ("Code", &reproduction.code_info),
  ]);

  let comparison = &result.comparison_experiments;
  display_section("Comparison", &[
    ("Methods", &comparison.compared_methods),
    ("Metrics", &comparison.evaluation_metrics),
    ("Results", &comparison.key_results),
    ("Conclusion", &comparison.experiment_conclusion),
  ]);
}

/// Prints one titled group of fields, continuing multi-line values under their branch.
fn display_section(title: &str, fields: &[(&str, &String)]) {
  println!("   {}", style(title).green().bold());
  for (i, (label, value)) in fields.iter().enumerate() {
    let last = i + 1 == fields.len();
    let branch = if last { TREE_LEAF } else { TREE_BRANCH };
    let continuation = if last { "   " } else { CONTINUE_PREFIX };

    let mut lines = value.lines();
    println!(
      "   {} {} {}",
      style(branch).dim(),
      style(format!("{label}:")).bold(),
      lines.next().unwrap_or_default()
    );
    for line in lines {
      println!("   {}   {line}", style(continuation).dim());
    }
  }
}

/// Prints the batch counters, the first analyses and the error log.
fn display_report(report: &BatchReport) {
  let status = match report.overall_status {
    OverallStatus::Success => style(format!("{} {}", SUCCESS_PREFIX, report.overall_status)).green(),
    OverallStatus::PartialError => {
      style(format!("{} {}", WARNING_PREFIX, report.overall_status)).yellow()
    },
    OverallStatus::Error => style(format!("{} {}", ERROR_PREFIX, report.overall_status)).red(),
  };
  println!("{} Batch finished: {status}", style(INFO_PREFIX).blue());
  println!("   {} {}", style("Papers found:").bold(), report.total_papers);
  println!("   {} {}", style("Supported:").bold(), report.valid_papers_count);
  println!("   {} {}", style("Analyzed:").bold(), report.analyzed_count);
  println!(
    "   {} {} YOLO-related, {} other",
    style("Classified:").bold(),
    report.yolo_related_count,
    report.non_yolo_related_count
  );

  if !report.analyzed_papers.is_empty() {
    println!("   {}", style("Analyses").green().bold());
    let shown = report.analyzed_papers.iter().take(SUMMARY_ANALYSES).collect::<Vec<_>>();
    for (i, analysis) in shown.iter().enumerate() {
      let branch = if i + 1 == shown.len() { TREE_LEAF } else { TREE_BRANCH };
      println!(
        "   {} {} {} ({})",
        style(branch).dim(),
        style(&analysis.paper.name).white(),
        truncate_with_ellipsis(&analysis.analysis_result.paper_title, SUMMARY_TITLE_CHARS),
        analysis.extraction_source
      );
    }
    if report.analyzed_papers.len() > SUMMARY_ANALYSES {
      println!(
        "   {}   ... and {} more",
        style(TREE_VERT).dim(),
        report.analyzed_papers.len() - SUMMARY_ANALYSES
      );
    }
  }

  if !report.error_log.is_empty() {
    println!("   {}", style("Errors").red().bold());
    for (i, entry) in report.error_log.iter().enumerate() {
      println!("   {}. {}", i + 1, style(entry).red());
    }
  }
}

use crate::rename::RenameReport;
use std::io::{self, Write};

/// What a batch operated on, for summary wording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchKind {
    Files,
    Restores,
    Folders,
}

impl BatchKind {
    fn noun(&self) -> &'static str {
        match self {
            BatchKind::Files => "files",
            BatchKind::Restores => "files",
            BatchKind::Folders => "directories",
        }
    }

    fn past_verb(&self) -> &'static str {
        match self {
            BatchKind::Restores => "restored",
            _ => "renamed",
        }
    }
}

/// Display dry run results in a formatted output
pub fn display_dry_run(
    report: &RenameReport,
    kind: BatchKind,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "========================================")?;
    writeln!(writer, "              DRY RUN")?;
    writeln!(writer, "========================================")?;
    writeln!(writer)?;

    if report.renamed_count() == 0 {
        writeln!(writer, "No {} to {}.", kind.noun(), verb_of(kind))?;
    } else {
        writeln!(writer, "Planned changes:")?;
        writeln!(writer)?;

        for (i, op) in report.operations().enumerate() {
            writeln!(writer, "  {}. From: {}", i + 1, op.source_path.display())?;
            writeln!(writer, "     To:   {}", op.destination_path.display())?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "----------------------------------------")?;
    writeln!(writer, "Summary:")?;
    writeln!(
        writer,
        "  {} {} would be {}",
        report.renamed_count(),
        kind.noun(),
        kind.past_verb()
    )?;
    write_problem_counts(report, writer)?;

    writeln!(writer)?;
    writeln!(writer, "Run without --dry to apply these changes.")?;

    Ok(())
}

/// Display execution results (non-dry-run)
pub fn display_execution_result(
    report: &RenameReport,
    kind: BatchKind,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(
        writer,
        "Successfully {} {} {}.",
        kind.past_verb(),
        report.renamed_count(),
        kind.noun()
    )?;
    write_problem_counts(report, writer)
}

fn verb_of(kind: BatchKind) -> &'static str {
    match kind {
        BatchKind::Restores => "restore",
        _ => "rename",
    }
}

fn write_problem_counts(report: &RenameReport, writer: &mut impl Write) -> io::Result<()> {
    let skipped = report.reported_skip_count();
    if skipped > 0 {
        writeln!(writer, "  {} skipped", skipped)?;
    }

    let failed = report.failed_count();
    if failed > 0 {
        writeln!(writer, "  {} failed", failed)?;
    }

    Ok(())
}

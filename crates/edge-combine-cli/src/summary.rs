use edge_combine::CombineReport;

/// Human readable description of a finished run.
pub fn format_summary(report: &CombineReport) -> String {
    let mut lines = Vec::with_capacity(report.blocks.len() + 3);
    lines.push(format!(
        "Combined order ({}):",
        report.sort_mode.description()
    ));
    for block in &report.blocks {
        lines.push(format!(
            "   {:>15}   ({} \u{d7} {})",
            block.name, block.size, block.size
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "Saved {}\u{d7}{} matrix \u{2192} {}",
        report.dimension,
        report.dimension,
        report.output_path.display()
    ));
    lines.join("\n")
}

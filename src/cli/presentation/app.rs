//! App presentation: key/value summary block followed by the instance table.

use crate::actor::bridge::MergedApplicationSummary;
use crate::actor::legacy::ApplicationSummary;
use crate::output::OutputSink;
use crate::summary::SummaryView;
use comfy_table::presets::NOTHING;
use comfy_table::Table;

pub const NO_RUNNING_INSTANCES: &str = "There are no running instances of this app.";

pub fn display_merged_application_summary(
    output: &mut dyn OutputSink,
    summary: &MergedApplicationSummary,
    display_command: bool,
) {
    display_summary_view(output, &SummaryView::from_merged(summary), display_command);
}

pub fn display_application_summary(
    output: &mut dyn OutputSink,
    summary: &ApplicationSummary,
    display_command: bool,
) {
    display_summary_view(output, &SummaryView::from_legacy(summary), display_command);
}

pub fn display_summary_view(output: &mut dyn OutputSink, view: &SummaryView, display_command: bool) {
    for (key, value) in summary_pairs(view, display_command) {
        output.write_out(&format!("{:<20}{}", format!("{}:", key), value));
    }
    output.write_out("");

    if view.instance_rows.is_empty() {
        output.write_out(NO_RUNNING_INSTANCES);
        return;
    }

    for line in format_instance_table(view)
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
    {
        output.write_out(line);
    }
}

fn summary_pairs(view: &SummaryView, display_command: bool) -> Vec<(&'static str, String)> {
    let mut pairs = vec![
        ("name", view.name.clone()),
        ("requested state", view.requested_state.clone()),
    ];
    if let Some(segment) = &view.isolation_segment {
        pairs.push(("isolation segment", segment.clone()));
    }
    pairs.push(("instances", view.instances.ratio()));
    pairs.push(("usage", view.instances.usage()));
    pairs.push(("routes", view.routes.clone()));
    pairs.push((
        "last uploaded",
        view.last_uploaded.clone().unwrap_or_default(),
    ));
    pairs.push(("stack", view.stack.clone()));
    let label = if view.buildpacks.len() > 1 {
        "buildpacks"
    } else {
        "buildpack"
    };
    pairs.push((label, view.buildpacks.join(", ")));
    if display_command {
        if let Some(command) = &view.start_command {
            pairs.push(("start command", command.clone()));
        }
    }
    pairs
}

fn format_instance_table(view: &SummaryView) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["", "state", "since", "cpu", "memory", "disk", "details"]);
    for row in &view.instance_rows {
        table.add_row(vec![
            row.index.as_str(),
            row.state.as_str(),
            row.since.as_str(),
            row.cpu.as_str(),
            row.memory.as_str(),
            row.disk.as_str(),
            row.details.as_str(),
        ]);
    }
    table.to_string()
}

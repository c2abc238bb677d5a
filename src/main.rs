mod cli;

use anyhow::Context;
use cli::{CommandLine, OutputFormat};
use study_plan::config::PlanFile;
use study_plan::report;
use study_plan::scheduler::{BalancedScheduler, ScheduleSummary};
use study_plan::validation::validate_form;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    cli::init_logging(commands.verbose);

    let output = run(commands)?;
    print!("{output}");
    Ok(())
}

fn run(commands: CommandLine) -> anyhow::Result<String> {
    let plan = match &commands.plan {
        Some(path) => PlanFile::load(path)?,
        None => PlanFile::default(),
    };
    let form = plan
        .merge(commands.days, commands.max_hours_per_day, commands.subjects)
        .into_form();

    let request = validate_form(&form).context("cannot build a study plan")?;
    info!(
        subjects = request.subjects.len(),
        days = request.days,
        max_hours_per_day = request.max_hours_per_day,
        "generating study plan"
    );

    let outcome = BalancedScheduler::new().run(&request);
    let summary = ScheduleSummary::calculate(&outcome.schedule, &outcome.subjects);

    let rendered = match commands.format {
        OutputFormat::Text => report::render_text(&outcome.schedule, &summary),
        OutputFormat::Json => report::render_json(&outcome.schedule, &summary)? + "\n",
    };
    Ok(rendered)
}

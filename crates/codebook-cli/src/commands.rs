use std::time::Instant;

use anyhow::{Result, anyhow};
use tracing::{info, info_span};

use codebook_cli::inputs::{ConfigOverrides, RunInputs, load_inputs, load_narrative_text};
use codebook_core::{CodebookContext, Narrative, VariableReport, assemble_codebook, data_dictionary};
use codebook_model::{DataDictionary, FrequencyTable};
use codebook_report::write_codebook;

use crate::cli::{DescribeArgs, GenerateArgs, InputArgs};
use crate::types::{GenerateResult, VariableStatus, VariableSummary};

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let span = info_span!("generate", output = %args.output.display());
    let _guard = span.enter();
    let start = Instant::now();

    let overrides = ConfigOverrides {
        title: args.title.clone(),
        seed: args.input.seed,
        page_width: args.page_width,
        page_length: args.page_length,
    };
    let inputs = load_run_inputs(&args.input, &overrides)?;
    let narrative = Narrative {
        overview: load_narrative_text(args.overview.as_deref())?,
        key_terms: load_narrative_text(args.keyterms.as_deref())?,
    };

    let ctx = CodebookContext::new(&inputs.dataset, &inputs.schema, &inputs.config);
    let assembly = assemble_codebook(&ctx, &narrative);
    let rendered = write_codebook(&assembly.codebook, &args.output, &inputs.config)?;

    let variables = inputs
        .schema
        .variables()
        .iter()
        .map(|descriptor| {
            let failure = assembly
                .codebook
                .failures
                .iter()
                .find(|failure| failure.variable == descriptor.name);
            let report = assembly
                .reports
                .iter()
                .find(|report| report.name == descriptor.name);
            match (report, failure) {
                (Some(report), _) => reported_summary(report),
                (None, Some(failure)) => VariableSummary {
                    name: descriptor.name.clone(),
                    kind: descriptor.kind().as_ref().map(ToString::to_string),
                    valid: None,
                    missing: None,
                    categories: None,
                    status: VariableStatus::Failed(failure.reason.clone()),
                },
                (None, None) => VariableSummary {
                    name: descriptor.name.clone(),
                    kind: None,
                    valid: None,
                    missing: None,
                    categories: None,
                    status: VariableStatus::Skipped,
                },
            }
        })
        .collect();

    info!(
        pages = rendered.pages,
        failures = assembly.codebook.failures.len(),
        duration_ms = start.elapsed().as_millis(),
        "generate complete"
    );
    Ok(GenerateResult {
        title: assembly.codebook.title.clone(),
        output: args.output.clone(),
        pages: rendered.pages,
        variables,
        has_errors: assembly.codebook.has_failures(),
    })
}

pub fn run_describe(args: &DescribeArgs) -> Result<Vec<VariableReport>> {
    let span = info_span!("describe", variables = args.variables.len());
    let _guard = span.enter();

    let overrides = ConfigOverrides {
        seed: args.input.seed,
        ..ConfigOverrides::default()
    };
    let inputs = load_run_inputs(&args.input, &overrides)?;
    let ctx = CodebookContext::new(&inputs.dataset, &inputs.schema, &inputs.config);

    args.variables
        .iter()
        .map(|name| {
            let descriptor = inputs.schema.require(name)?;
            ctx.report_variable(descriptor)?
                .ok_or_else(|| anyhow!("variable {name} has no data type"))
        })
        .collect()
}

pub fn run_dictionary(args: &InputArgs) -> Result<DataDictionary> {
    let inputs = load_run_inputs(args, &ConfigOverrides::default())?;
    Ok(data_dictionary(&inputs.dataset, &inputs.schema))
}

fn load_run_inputs(input: &InputArgs, overrides: &ConfigOverrides) -> Result<RunInputs> {
    load_inputs(
        &input.data,
        &input.schema,
        input.config.as_deref(),
        overrides,
    )
}

fn reported_summary(report: &VariableReport) -> VariableSummary {
    VariableSummary {
        name: report.name.clone(),
        kind: Some(report.kind.to_string()),
        valid: Some(report.counts.valid),
        missing: Some(report.counts.missing),
        categories: report.frequencies.as_ref().map(FrequencyTable::len),
        status: VariableStatus::Reported,
    }
}

//! `create:nodes`: resolve the generation request, create the batch and
//! report the created nodes.

use std::io::stdout;

use chrono::Utc;
use cms_console_core::catalog::ContentTypeCatalog;
use cms_console_core::error::Result;
use cms_console_core::generator::{BatchGenerator, ContentApi, NodeRecord};
use cms_console_core::messages::{keys, Messages};
use cms_console_core::parameters::{
    resolve_generation_request, NonInteractivePrompter, Prompter, RawGenerationInput,
};
use cms_console_core::table::Table;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cli_args::CreateNodesArgs;
use crate::context::SiteContext;
use crate::interaction::output::{print_success, print_warning};
use crate::interaction::TerminalPrompter;

/// What a `create:nodes` run prints.
#[derive(Debug)]
pub struct NodesReport {
    pub table: Table,
    pub generated: String,
    pub failed: Option<String>,
}

/// Resolves the request, creates the nodes through `api` and builds the report.
///
/// # Errors
///
/// Returns an error for an invalid selection or option value, or when the
/// content API fails as a whole.
pub fn generate_report<P, A, R>(
    raw: &RawGenerationInput,
    catalog: &ContentTypeCatalog,
    messages: &Messages,
    prompter: &mut P,
    api: &mut A,
    generator: &mut BatchGenerator<R>,
) -> Result<NodesReport>
where
    P: Prompter + ?Sized,
    A: ContentApi + ?Sized,
    R: Rng,
{
    let (selection, parameters) = resolve_generation_request(raw, catalog, messages, prompter)?;
    info!(
        "Generating {} nodes of {:?}",
        parameters.limit,
        selection.ids()
    );

    let result = generator.generate(api, &selection, &parameters)?;

    for failed in &result.failure {
        warn!(
            "Node \"{}\" ({}) was not created: {}",
            failed.draft.title, failed.draft.content_type, failed.reason
        );
    }

    let table = Table::new([
        messages.trans(keys::NODES_NODE_ID),
        messages.trans(keys::NODES_CONTENT_TYPE),
        messages.trans(keys::NODES_TITLE),
        messages.trans(keys::NODES_CREATED),
    ])
    .with_rows(result.success.iter().map(NodeRecord::as_row).collect());

    let generated = messages.format(
        keys::NODES_GENERATED,
        &[("count", parameters.limit.to_string())],
    )?;

    let failed = if result.failure.is_empty() {
        None
    } else {
        Some(messages.format(
            keys::NODES_FAILED,
            &[("count", result.failure.len().to_string())],
        )?)
    };

    Ok(NodesReport {
        table,
        generated,
        failed,
    })
}

pub fn handle(context: &SiteContext, args: &CreateNodesArgs, interactive: bool) -> Result<()> {
    let catalog = context.catalog();
    let mut store = context.content_store()?;

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut generator = BatchGenerator::new(rng, Utc::now());

    let mut prompter: Box<dyn Prompter> = if interactive {
        Box::new(TerminalPrompter::stdio())
    } else {
        Box::new(NonInteractivePrompter)
    };

    let report = generate_report(
        &args.raw_input(),
        &catalog,
        &context.messages,
        prompter.as_mut(),
        &mut store,
        &mut generator,
    )?;

    println!("{}", report.table.render());

    let mut stdout = stdout();
    print_success(&mut stdout, &report.generated)?;
    if let Some(failed) = &report.failed {
        print_warning(&mut stdout, failed)?;
    }

    Ok(())
}

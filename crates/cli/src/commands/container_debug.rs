//! `container:debug`: list the service registry or describe one service.

use cms_console_core::error::Result;
use cms_console_core::inspector::{Inspector, ServiceSummary};
use cms_console_core::messages::{keys, Messages};
use cms_console_core::table::{Table, TableStyle};
use log::debug;

use crate::context::SiteContext;

/// Builds the compact table for a listing (no `service_id`) or a single
/// service description.
///
/// # Errors
///
/// Returns [`cms_console_core::error::Error::NotFound`] for an unknown
/// service id.
pub fn build_table<I: Inspector + ?Sized>(
    inspector: &I,
    messages: &Messages,
    service_id: Option<&str>,
) -> Result<Table> {
    match service_id {
        None => {
            let rows = inspector
                .list_services()
                .iter()
                .map(ServiceSummary::as_row)
                .collect();

            Ok(Table::new([
                messages.trans(keys::DEBUG_SERVICE_ID),
                messages.trans(keys::DEBUG_CLASS_NAME),
            ])
            .with_style(TableStyle::Compact)
            .with_rows(rows))
        }
        Some(service_id) => {
            debug!("Describing service `{}`", service_id);
            let rows = inspector.describe(service_id)?.detail_rows(messages)?;

            Ok(Table::new(Vec::<String>::new())
                .with_style(TableStyle::Compact)
                .with_rows(rows))
        }
    }
}

pub fn handle(context: &SiteContext, service_id: Option<&str>) -> Result<()> {
    let table = build_table(&context.inspector(), &context.messages, service_id)?;
    println!("{}", table.render());
    Ok(())
}

//! Contact and Customer Care form checks.

use shophub_core::{ContactForm, FieldErrors, IssueReportForm, IssueType, Notifier, Storefront};
use tracing::{error, info};

/// Validate and send a contact message.
///
/// # Errors
///
/// Returns an error summarizing the number of invalid fields.
pub fn contact<N: Notifier>(
    store: &mut Storefront<N>,
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let form = ContactForm {
        name,
        email,
        subject,
        message,
    };
    let sent = store.submit_contact(&form).map_err(report_errors)?;

    info!(name = %sent.name, email = %sent.email, subject = %sent.subject, "Contact message accepted");
    Ok(())
}

/// Validate and file an issue report.
///
/// # Errors
///
/// Returns an error summarizing the number of invalid fields.
pub fn report<N: Notifier>(
    store: &mut Storefront<N>,
    issue_type: Option<IssueType>,
    order_id: String,
    description: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let form = IssueReportForm {
        issue_type,
        order_id,
        description,
    };
    let filed = store.report_issue(&form).map_err(report_errors)?;

    if let Some(order) = store.orders().get(&filed.order_id) {
        info!(status = %order.status, "Order {} found", order.number);
    }
    info!(issue_type = %filed.issue_type, order_id = %filed.order_id, "Issue report accepted");
    Ok(())
}

/// Send a live-chat message.
///
/// # Errors
///
/// Returns an error if the message is blank.
pub fn chat<N: Notifier>(
    store: &mut Storefront<N>,
    message: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let sent = store.send_chat(message).map_err(report_errors)?;
    info!(chars = sent.chars().count(), "Chat message sent");
    Ok(())
}

fn report_errors(errors: FieldErrors) -> Box<dyn std::error::Error> {
    for (field, message) in errors.iter() {
        error!("  - {field}: {message}");
    }
    format!("{} validation errors found", errors.len()).into()
}

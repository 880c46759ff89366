use crate::domain::{SmsComposer, SmsMessage};

/// Builds an `smsto:` URI for the message recipient.
pub fn sms_uri(message: &SmsMessage) -> String {
    format!("smsto:{}", message.to)
}

/// Terminal stand-in for the phone's SMS app.
///
/// Copies the message body to the system clipboard so it can be pasted into
/// any messaging app. Clipboard failures are logged, not reported.
#[derive(Debug, Default)]
pub struct ClipboardComposer;

impl SmsComposer for ClipboardComposer {
    fn compose(&self, message: &SmsMessage) {
        let uri = sms_uri(message);
        match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(message.body.clone())) {
            Ok(()) => tracing::info!(%uri, "SMS body copied to clipboard"),
            Err(e) => tracing::warn!(%uri, error = %e, "could not copy SMS body to clipboard"),
        }
    }
}

use std::fmt;

use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use log::{info, warn};
use serde::Serialize;
use web_sys::window;

use crate::config;
use crate::i18n::Locale;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ContactPayload {
    pub source: &'static str,
    pub lang: &'static str,
    pub message: &'static str,
}

impl ContactPayload {
    pub fn new(locale: Locale) -> Self {
        Self {
            source: config::CONTACT_SOURCE,
            lang: locale.code(),
            message: config::CONTACT_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContactError {
    Build(String),
    Network(String),
    Rejected(u16),
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::Build(e) => write!(f, "could not build contact request: {}", e),
            ContactError::Network(e) => write!(f, "contact request failed: {}", e),
            ContactError::Rejected(status) => write!(f, "contact webhook answered {}", status),
        }
    }
}

impl std::error::Error for ContactError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    Delivered,
    FellBack,
}

/// The browser side of a contact attempt.
pub trait ContactChannel {
    fn notify(&self, payload: &ContactPayload) -> LocalBoxFuture<'static, Result<(), ContactError>>;
    fn open_mail(&self, address: &str);
    fn show_notice(&self, message: &str);
}

/// One webhook attempt. Anything but a 2xx answer opens the mail client
/// instead; there is no retry.
pub async fn dispatch<C: ContactChannel>(
    channel: &C,
    payload: ContactPayload,
    success_notice: &str,
) -> ContactOutcome {
    match channel.notify(&payload).await {
        Ok(()) => {
            info!("Contact request delivered (lang={})", payload.lang);
            channel.show_notice(success_notice);
            ContactOutcome::Delivered
        }
        Err(e) => {
            warn!("{}, opening mail client instead", e);
            channel.open_mail(config::CONTACT_EMAIL);
            ContactOutcome::FellBack
        }
    }
}

pub struct BrowserChannel {
    endpoint: &'static str,
}

impl BrowserChannel {
    pub fn new(endpoint: &'static str) -> Self {
        Self { endpoint }
    }
}

impl Default for BrowserChannel {
    fn default() -> Self {
        Self::new(config::get_contact_webhook_url())
    }
}

impl ContactChannel for BrowserChannel {
    fn notify(&self, payload: &ContactPayload) -> LocalBoxFuture<'static, Result<(), ContactError>> {
        let request = Request::post(self.endpoint)
            .header("Content-Type", "application/json")
            .json(payload);

        Box::pin(async move {
            let response = request
                .map_err(|e| ContactError::Build(e.to_string()))?
                .send()
                .await
                .map_err(|e| ContactError::Network(e.to_string()))?;

            if response.ok() {
                Ok(())
            } else {
                Err(ContactError::Rejected(response.status()))
            }
        })
    }

    fn open_mail(&self, address: &str) {
        // Nothing more to do if no mail handler picks this up.
        if let Some(window) = window() {
            let _ = window.location().set_href(&format!("mailto:{}", address));
        }
    }

    fn show_notice(&self, message: &str) {
        if let Some(window) = window() {
            let _ = window.alert_with_message(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct RecordingChannel {
        answer: Result<(), ContactError>,
        sent: RefCell<Vec<String>>,
        mail_opened: RefCell<Vec<String>>,
        notices: RefCell<Vec<String>>,
    }

    impl RecordingChannel {
        fn answering(answer: Result<(), ContactError>) -> Self {
            Self {
                answer,
                sent: RefCell::new(Vec::new()),
                mail_opened: RefCell::new(Vec::new()),
                notices: RefCell::new(Vec::new()),
            }
        }
    }

    impl ContactChannel for RecordingChannel {
        fn notify(&self, payload: &ContactPayload) -> LocalBoxFuture<'static, Result<(), ContactError>> {
            self.sent.borrow_mut().push(serde_json::to_string(payload).unwrap());
            let answer = self.answer.clone();
            Box::pin(async move { answer })
        }

        fn open_mail(&self, address: &str) {
            self.mail_opened.borrow_mut().push(address.to_string());
        }

        fn show_notice(&self, message: &str) {
            self.notices.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn network_failure_falls_back_to_mail_once() {
        let channel = RecordingChannel::answering(Err(ContactError::Network("offline".into())));
        let outcome = block_on(dispatch(&channel, ContactPayload::new(Locale::En), "sent"));

        assert_eq!(outcome, ContactOutcome::FellBack);
        assert_eq!(channel.sent.borrow().len(), 1);
        assert_eq!(*channel.mail_opened.borrow(), vec![config::CONTACT_EMAIL.to_string()]);
        assert!(channel.notices.borrow().is_empty());
    }

    #[test]
    fn non_2xx_answer_counts_as_failure() {
        let channel = RecordingChannel::answering(Err(ContactError::Rejected(502)));
        let outcome = block_on(dispatch(&channel, ContactPayload::new(Locale::Pt), "sent"));

        assert_eq!(outcome, ContactOutcome::FellBack);
        assert_eq!(channel.mail_opened.borrow().len(), 1);
        assert!(channel.notices.borrow().is_empty());
    }

    #[test]
    fn delivery_shows_notice_and_skips_mail() {
        let channel = RecordingChannel::answering(Ok(()));
        let outcome = block_on(dispatch(&channel, ContactPayload::new(Locale::Pt), "Mensagem enviada!"));

        assert_eq!(outcome, ContactOutcome::Delivered);
        assert_eq!(*channel.notices.borrow(), vec!["Mensagem enviada!".to_string()]);
        assert!(channel.mail_opened.borrow().is_empty());
    }

    #[test]
    fn payload_carries_source_locale_and_message() {
        let channel = RecordingChannel::answering(Ok(()));
        block_on(dispatch(&channel, ContactPayload::new(Locale::Pt), "ok"));

        let sent: serde_json::Value = serde_json::from_str(&channel.sent.borrow()[0]).unwrap();
        assert_eq!(
            sent,
            serde_json::json!({
                "source": "portfolio",
                "lang": "pt",
                "message": "User clicked the contact CTA from portfolio site",
            })
        );
    }

    #[test]
    fn errors_read_well_in_logs() {
        assert_eq!(ContactError::Rejected(404).to_string(), "contact webhook answered 404");
        assert_eq!(
            ContactError::Network("timeout".into()).to_string(),
            "contact request failed: timeout"
        );
    }
}

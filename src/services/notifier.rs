//! Notification sink interface and Telegram implementation.

use crate::models::{Decision, Verdict};
use serde_json::json;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<(), BoxError>;
}

/// Notifier that drops every message; used when no transport is configured.
pub struct NoopNotifier;

#[async_trait::async_trait]
impl Notifier for NoopNotifier {
    async fn send(&self, _text: &str) -> Result<(), BoxError> {
        Ok(())
    }
}

/// Telegram Bot API notifier.
pub struct TelegramNotifier {
    http: reqwest::Client,
    base_url: String,
    token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self::with_base_url("https://api.telegram.org", token, chat_id)
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: token.into(),
            chat_id: chat_id.into(),
        }
    }
}

#[async_trait::async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), BoxError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        self.http
            .post(&url)
            .json(&json!({
                "chat_id": self.chat_id,
                "text": text,
                "parse_mode": "Markdown",
            }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Render a decision as a human-readable notification message.
pub fn render_decision(decision: &Decision) -> String {
    let emoji = match decision.verdict {
        Verdict::Buy => "\u{1F7E2}",
        Verdict::Sell => "\u{1F534}",
        Verdict::Neutral => "\u{26AA}",
        Verdict::Error => "\u{274C}",
    };

    let mut message = format!(
        "{} *{} signal: {:?}*\n\
         Price: ${:.2}\n\
         Confidence: {:.2}%\n\
         Target: ${:.2} / Stop: ${:.2}\n",
        emoji,
        decision.symbol,
        decision.verdict,
        decision.reference_price,
        decision.confidence,
        decision.price_target,
        decision.stop_loss,
    );

    if !decision.votes.is_empty() {
        message.push_str("\nVotes:\n");
        for vote in &decision.votes {
            message.push_str(&format!(
                "- {}: {:?} ({:.2}%)\n",
                vote.source, vote.direction, vote.confidence
            ));
        }
    }

    message.push_str(
        "\n_Automated analysis, not financial advice. Always do your own research._",
    );
    message
}

//! Discord webhook sink.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::warn;
use url::Url;

use crate::config::DiscordConfig;
use crate::domain::{Channel, Notification};
use crate::error::{ConfigError, NotifyError, Result};
use crate::notify::sink::{Delivery, NotificationSink};

const FOOTER_TEXT: &str = "Angryroll Gaming Platform";
const FOOTER_ICON_URL: &str = "https://i.ibb.co/4ZrYNdfK/Group-5641.png";
const THUMBNAIL_URL: &str = "https://i.ibb.co/jP4k6Bzy/Website-Logo-Text-Valo2-1.png";

/// Posts notifications as embeds to the configured Discord webhooks.
///
/// Revenue notifications fall back to the games webhook when no dedicated
/// revenue webhook is configured. A channel with no usable webhook skips
/// delivery instead of failing.
pub struct DiscordSink {
    http: reqwest::Client,
    games_webhook: Option<Url>,
    revenue_webhook: Option<Url>,
}

impl DiscordSink {
    /// Build a sink from Discord configuration.
    pub fn new(config: &DiscordConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            games_webhook: parse_webhook(
                config.games_webhook.as_deref(),
                "DISCORD_WEBHOOK_URL_GAMES",
            )?,
            revenue_webhook: parse_webhook(
                config.revenue_webhook.as_deref(),
                "DISCORD_WEBHOOK_URL_REVENUE",
            )?,
        })
    }

    /// Webhook serving a channel, after the revenue-to-games fallback.
    fn webhook_for(&self, channel: Channel) -> Option<&Url> {
        match channel {
            Channel::Games => self.games_webhook.as_ref(),
            Channel::Revenue => self.revenue_webhook.as_ref().or(self.games_webhook.as_ref()),
        }
    }
}

#[async_trait]
impl NotificationSink for DiscordSink {
    async fn deliver(&self, notification: &Notification) -> Result<Delivery> {
        let Some(webhook) = self.webhook_for(notification.channel) else {
            warn!(
                channel = %notification.channel,
                "Webhook URL not configured, skipping notification"
            );
            return Ok(Delivery::Skipped);
        };

        let payload = WebhookPayload {
            embeds: vec![Embed::from_notification(notification)],
        };

        let response = self
            .http
            .post(webhook.clone())
            .json(&payload)
            .send()
            .await
            .map_err(NotifyError::Request)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        Ok(Delivery::Sent)
    }

    fn name(&self) -> &'static str {
        "discord"
    }
}

fn parse_webhook(url: Option<&str>, field: &'static str) -> Result<Option<Url>> {
    url.map(|raw| {
        Url::parse(raw).map_err(|e| {
            ConfigError::InvalidValue {
                field,
                reason: e.to_string(),
            }
            .into()
        })
    })
    .transpose()
}

#[derive(Debug, Serialize)]
struct WebhookPayload {
    embeds: Vec<Embed>,
}

#[derive(Debug, Serialize)]
struct Embed {
    title: String,
    description: String,
    color: u32,
    fields: Vec<EmbedField>,
    timestamp: String,
    footer: EmbedFooter,
    thumbnail: EmbedThumbnail,
}

#[derive(Debug, Serialize)]
struct EmbedField {
    name: String,
    value: String,
    inline: bool,
}

#[derive(Debug, Serialize)]
struct EmbedFooter {
    text: &'static str,
    icon_url: &'static str,
}

#[derive(Debug, Serialize)]
struct EmbedThumbnail {
    url: &'static str,
}

impl Embed {
    fn from_notification(notification: &Notification) -> Self {
        Self {
            title: notification.title.clone(),
            description: notification.body.clone(),
            color: notification.color,
            fields: notification
                .fields
                .iter()
                .map(|f| EmbedField {
                    name: f.name.clone(),
                    value: f.value.clone(),
                    inline: f.inline,
                })
                .collect(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            footer: EmbedFooter {
                text: FOOTER_TEXT,
                icon_url: FOOTER_ICON_URL,
            },
            thumbnail: EmbedThumbnail {
                url: THUMBNAIL_URL,
            },
        }
    }
}

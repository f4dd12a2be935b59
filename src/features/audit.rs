//! Usage log posted to the audit channel after a delivered summary.

use chrono::Utc;
use tracing::{error, info, warn};

use crate::core::models::UsageRecord;
use crate::core::ports::{AuditDelivery, ChatPlatform};
use crate::errors::BotError;

/// Build and post the usage record for one invocation.
///
/// # Errors
///
/// Returns an error if the channel lookup or the send fails.
pub async fn record_usage(
    platform: &dyn ChatPlatform,
    audit_channel_id: u64,
    message_count: usize,
) -> Result<AuditDelivery, BotError> {
    let record = UsageRecord {
        user_name: platform.invoker_name(),
        channel_name: platform.channel_name().await?,
        message_count,
        timestamp: Utc::now(),
    };

    platform.post_usage_record(audit_channel_id, &record).await
}

/// Post the usage record, logging instead of propagating any failure.
///
/// The summary has already been delivered when this runs, so nothing here may
/// reach the user.
pub async fn record_usage_best_effort(
    platform: &dyn ChatPlatform,
    audit_channel_id: u64,
    message_count: usize,
) {
    match record_usage(platform, audit_channel_id, message_count).await {
        Ok(AuditDelivery::Posted) => {
            info!(audit_channel_id, message_count, "Usage record posted");
        }
        Ok(AuditDelivery::ChannelNotFound) => {
            warn!(audit_channel_id, "Audit channel not found, usage record skipped");
        }
        Ok(AuditDelivery::MissingPermission) => {
            warn!(
                audit_channel_id,
                "No send permission in audit channel, usage record skipped"
            );
        }
        Err(e) => {
            error!(audit_channel_id, "Failed to post usage record: {}", e);
        }
    }
}

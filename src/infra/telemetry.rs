use std::sync::Once;

use metrics::{Unit, describe_counter};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingSettings};

use super::error::InfraError;

pub const POSTS_CREATED_TOTAL: &str = "journal_posts_created_total";
pub const POST_CREATE_FAILURES_TOTAL: &str = "journal_post_create_failures_total";
pub const POST_LOOKUPS_TOTAL: &str = "journal_post_lookups_total";

static METRIC_DESCRIPTIONS: Once = Once::new();

/// Install a global tracing subscriber using the provided logging settings.
pub fn init(logging: &LoggingSettings) -> Result<(), InfraError> {
    describe_metrics();

    let env_filter = EnvFilter::builder()
        .with_default_directive(logging.level.into())
        .from_env_lossy();

    let fmt_layer = match logging.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .boxed(),
        LogFormat::Compact => fmt::layer().compact().with_target(true).boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(ErrorLayer::default())
        .with(fmt_layer)
        .try_init()
        .map_err(|err| {
            InfraError::telemetry(format!("failed to install tracing subscriber: {err}"))
        })
}

/// Register descriptions for the counters the journal emits. Idempotent.
pub fn describe_metrics() {
    METRIC_DESCRIPTIONS.call_once(|| {
        describe_counter!(
            POSTS_CREATED_TOTAL,
            Unit::Count,
            "Total number of posts durably stored."
        );
        describe_counter!(
            POST_CREATE_FAILURES_TOTAL,
            Unit::Count,
            "Total number of compose submissions the store rejected."
        );
        describe_counter!(
            POST_LOOKUPS_TOTAL,
            Unit::Count,
            "Total number of post detail lookups, labelled by outcome."
        );
    });
}

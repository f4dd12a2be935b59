//! Slash-command table, dispatch and the command error hook.

pub mod summary;

use futures::future::BoxFuture;
use tracing::{Instrument, error, info_span, warn};
use uuid::Uuid;

use crate::bot::RecapBot;
use crate::core::ports::ChatPlatform;
use crate::errors::BotError;
use crate::features::deliver::{PERMISSION_DENIED_NOTICE, format_command_failure};

pub type CommandFuture<'a> = BoxFuture<'a, Result<(), BotError>>;

pub type CommandFn = for<'a> fn(&'a dyn ChatPlatform, &'a RecapBot) -> CommandFuture<'a>;

/// Permission the invoking user must hold before a command body runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallerPermission {
    ReadMessages,
}

impl CallerPermission {
    fn is_held_by(self, platform: &dyn ChatPlatform) -> bool {
        match self {
            CallerPermission::ReadMessages => platform.caller_can_read_messages(),
        }
    }

    fn label(self) -> &'static str {
        match self {
            CallerPermission::ReadMessages => "read_messages",
        }
    }
}

pub struct SlashCommand {
    pub name: &'static str,
    pub description: &'static str,
    pub required: &'static [CallerPermission],
    pub run: CommandFn,
}

impl SlashCommand {
    fn check(&self, platform: &dyn ChatPlatform) -> Result<(), BotError> {
        let missing: Vec<&str> = self
            .required
            .iter()
            .filter(|p| !p.is_held_by(platform))
            .map(|p| p.label())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(BotError::MissingPermissions(missing.join(", ")))
        }
    }
}

/// Every command the bot registers with the platform.
pub const COMMANDS: &[SlashCommand] = &[SlashCommand {
    name: summary::NAME,
    description: summary::DESCRIPTION,
    required: &[CallerPermission::ReadMessages],
    run: summary::run,
}];

#[must_use]
pub fn find_command(name: &str) -> Option<&'static SlashCommand> {
    COMMANDS.iter().find(|c| c.name == name)
}

/// Route one interaction to its command, running the permission gate first.
pub async fn dispatch(name: &str, platform: &dyn ChatPlatform, bot: &RecapBot) {
    let Some(command) = find_command(name) else {
        warn!(command = name, "Ignoring unknown command");
        return;
    };

    let span = info_span!(
        "command",
        command = command.name,
        correlation_id = %Uuid::new_v4()
    );

    async {
        let result = match command.check(platform) {
            Ok(()) => (command.run)(platform, bot).await,
            Err(e) => Err(e),
        };

        if let Err(e) = result {
            on_command_error(platform, &e).await;
        }
    }
    .instrument(span)
    .await;
}

/// Answer errors that escaped a command body.
pub async fn on_command_error(platform: &dyn ChatPlatform, error: &BotError) {
    let reply = match error {
        BotError::MissingPermissions(missing) => {
            warn!(missing = %missing, "Caller lacks permissions");
            PERMISSION_DENIED_NOTICE.to_string()
        }
        other => {
            error!("Command failed: {}", other);
            format_command_failure(other)
        }
    };

    if let Err(e) = platform.respond_ephemeral(&reply).await {
        error!("Failed to send command error response: {}", e);
    }
}

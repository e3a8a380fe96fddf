//! REPL runner: converts teloxide messages to core InboundMessage and hands them to the Handler,
//! one spawned task per message. Lifecycle events are logged only.

use anyhow::Result;
use cmdbot_core::{Handler, ToInboundMessage};
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Runs until the REPL stops. `get_me` is called once up front: success is logged as ready,
/// failure as an authentication failure; neither changes what happens next.
#[instrument(skip(bot, handler))]
pub async fn run_repl(bot: teloxide::Bot, handler: Arc<dyn Handler>) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            info!(
                bot_id = me.user.id.0,
                username = %me.user.username.as_deref().unwrap_or("unknown"),
                "Bot is ready"
            );
        }
        Err(e) => {
            error!(error = %e, "Authentication failure");
        }
    }

    teloxide::repl(bot, move |msg: Message| {
        let handler = handler.clone();

        async move {
            let inbound = TelegramMessageWrapper(&msg).to_inbound();

            info!(
                sender_id = %inbound.sender.id,
                chat_id = %inbound.chat.id,
                message_content = %inbound.body,
                "Received message"
            );

            tokio::spawn(async move {
                let response = handler.handle(&inbound).await;
                info!(
                    sender_id = %inbound.sender.id,
                    message_id = %inbound.id,
                    response = ?response,
                    "Message handled"
                );
            });

            respond(())
        }
    })
    .await;

    warn!("Telegram REPL stopped (disconnected or shut down)");
    Ok(())
}

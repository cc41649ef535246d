//! CTF lifecycle commands.
//!
//! Handles:
//! - `create <name> "<long name>"` - Register a new CTF (admin only)
//! - `status` - Show all tracked CTFs
//! - `finish <name>` - Mark a CTF as finished

use super::traits::{Handler, HandlerContext};
use crate::error::{HandlerError, HandlerResult};
use crate::models::Ctf;
use async_trait::async_trait;
use tracing::info;

/// Handler for the `ctf` command family.
pub struct CtfHandler;

#[async_trait]
impl Handler for CtfHandler {
    fn usage(&self, is_admin: bool) -> String {
        let mut usage = String::from(
            "*ctf* - CTF lifecycle\n\
             `ctf status` - Show all tracked CTFs\n\
             `ctf finish <name>` - Mark a CTF as finished\n",
        );
        if is_admin {
            usage.push_str("`ctf create <name> \"<long name>\"` - Register a new CTF (admin)\n");
        }
        usage
    }

    fn can_handle(&self, subcommand: &str, is_admin: bool) -> bool {
        match subcommand {
            "status" | "finish" => true,
            "create" => is_admin,
            _ => false,
        }
    }

    async fn process(
        &self,
        ctx: &HandlerContext<'_>,
        subcommand: &str,
        args: &[String],
    ) -> HandlerResult {
        match subcommand {
            "create" => self.create(ctx, args).await,
            "status" => self.status(ctx).await,
            "finish" => self.finish(ctx, args).await,
            other => Err(HandlerError::invalid(format!(
                "Unknown command : `{}`",
                other
            ))),
        }
    }
}

impl CtfHandler {
    async fn create(&self, ctx: &HandlerContext<'_>, args: &[String]) -> HandlerResult {
        let [name, long_name] = args else {
            return Err(HandlerError::invalid(
                "Usage: `ctf create <name> \"<long name>\"`",
            ));
        };

        if ctx.storage.get_ctf(name).await?.is_some() {
            return Err(HandlerError::invalid(format!(
                "A CTF named `{}` already exists.",
                name
            )));
        }

        let ctf = Ctf::new(ctx.channel_id, name.clone(), long_name.clone());
        ctx.storage.put_ctf(ctf).await?;
        info!(ctf = %name, channel_id = %ctx.channel_id, "CTF created");

        ctx.transport
            .post_message(
                ctx.channel_id,
                &format!("CTF *{}* ({}) created.", name, long_name),
                Some(ctx.timestamp),
            )
            .await;
        Ok(())
    }

    async fn status(&self, ctx: &HandlerContext<'_>) -> HandlerResult {
        let ctfs = ctx.storage.list_ctfs().await?;
        if ctfs.is_empty() {
            ctx.transport
                .post_message(ctx.channel_id, "No CTFs are being tracked.", Some(ctx.timestamp))
                .await;
            return Ok(());
        }

        let mut text = String::from("Tracked CTFs:\n");
        for ctf in &ctfs {
            if ctf.finished {
                let finished = chrono::DateTime::from_timestamp(ctf.finished_on, 0)
                    .map(|dt| dt.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                text.push_str(&format!(
                    "  *{}* ({}) - finished {}\n",
                    ctf.name, ctf.long_name, finished
                ));
            } else {
                text.push_str(&format!(
                    "  *{}* ({}) - running, {} challenges\n",
                    ctf.name,
                    ctf.long_name,
                    ctf.challenges.len()
                ));
            }
        }

        ctx.transport
            .post_message(ctx.channel_id, &text, Some(ctx.timestamp))
            .await;
        Ok(())
    }

    async fn finish(&self, ctx: &HandlerContext<'_>, args: &[String]) -> HandlerResult {
        let [name] = args else {
            return Err(HandlerError::invalid("Usage: `ctf finish <name>`"));
        };

        let Some(mut ctf) = ctx.storage.get_ctf(name).await? else {
            return Err(HandlerError::invalid(format!(
                "No CTF named `{}` is being tracked.",
                name
            )));
        };

        ctf.finished = true;
        ctf.finished_on = chrono::Utc::now().timestamp();
        ctx.storage.put_ctf(ctf).await?;
        info!(ctf = %name, "CTF finished");

        ctx.transport
            .post_message(
                ctx.channel_id,
                &format!("CTF *{}* marked as finished.", name),
                Some(ctx.timestamp),
            )
            .await;
        Ok(())
    }
}

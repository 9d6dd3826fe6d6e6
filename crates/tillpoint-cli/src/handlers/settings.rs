//! Settings handlers.

use anyhow::Result;
use tillpoint_core::{Settings, SettingsUpdate};

use crate::bootstrap::CliContext;
use crate::settings_commands::SettingsCommand;

pub async fn execute(ctx: &CliContext, command: SettingsCommand) -> Result<()> {
    let settings = match command {
        SettingsCommand::Show => ctx.app().settings().get().await?,
        SettingsCommand::Set {
            store_name,
            currency,
            reorder_threshold,
            port,
        } => {
            let update = SettingsUpdate {
                store_name: store_name.map(Some),
                currency: currency.map(Some),
                default_reorder_threshold: reorder_threshold.map(Some),
                server_port: port.map(Some),
            };
            let settings = ctx.app().settings().update(update).await?;
            println!("Settings saved.");
            settings
        }
    };
    print_settings(&settings);
    Ok(())
}

fn print_settings(settings: &Settings) {
    println!("Store name:        {}", settings.effective_store_name());
    println!("Currency:          {}", settings.effective_currency());
    println!("Reorder threshold: {}", settings.effective_reorder_threshold());
    println!("Server port:       {}", settings.effective_server_port());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::context;

    #[tokio::test]
    async fn test_set_only_touches_given_fields() {
        let (_db, ctx) = context().await;

        execute(
            &ctx,
            SettingsCommand::Set {
                store_name: None,
                currency: Some("gbp".to_string()),
                reorder_threshold: Some(8),
                port: None,
            },
        )
        .await
        .unwrap();

        let settings = ctx.app().settings().get().await.unwrap();
        assert_eq!(settings.effective_currency(), "GBP");
        assert_eq!(settings.effective_reorder_threshold(), 8);
        assert_eq!(settings.effective_store_name(), "tillpoint");
    }

    #[tokio::test]
    async fn test_privileged_port_is_rejected() {
        let (_db, ctx) = context().await;

        let result = execute(
            &ctx,
            SettingsCommand::Set {
                store_name: None,
                currency: None,
                reorder_threshold: None,
                port: Some(443),
            },
        )
        .await;
        assert!(result.is_err());
    }
}

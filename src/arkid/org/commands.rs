//! Organization, member and invitation command handlers

use log::debug;

use crate::arkid::ArkIdResponse;
use crate::cli::{parse_json_data, InviteCommand, MemberCommand, OrgCommand};
use crate::output::output_response;
use crate::ui::{confirm_action, with_spinner};
use crate::Cli;

use super::models::{OrgListParams, PageParams};
use super::OrgClient;

type CommandResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// Print a response, or `done` when the server sent no body
fn report(response: &ArkIdResponse, cli: &Cli, done: &str) -> CommandResult {
    if response.data().is_null() {
        println!("{}", done);
        return Ok(());
    }
    output_response(response, &cli.output)?;
    Ok(())
}

/// Run an 'org' subcommand
pub async fn run_org_command(
    client: &OrgClient,
    cli: &Cli,
    action: &OrgCommand,
) -> CommandResult {
    match action {
        OrgCommand::List { role } => {
            let params = OrgListParams {
                role: role.clone(),
                ..OrgListParams::default()
            };
            let response = with_spinner(
                "Fetching organizations...",
                cli.batch,
                client.query_own_org(&params),
            )
            .await?;
            debug!("Fetched {} organizations", response.items().len());
            output_response(&response, &cli.output)?;
        }
        OrgCommand::Get { oid } => {
            let response = with_spinner(
                &format!("Fetching organization '{}'...", oid),
                cli.batch,
                client.query_org(oid),
            )
            .await?;
            output_response(&response, &cli.output)?;
        }
        OrgCommand::Create(args) => {
            let body = match (&args.name, &args.data) {
                (_, Some(data)) => parse_json_data(data)?,
                (Some(name), None) => serde_json::json!({ "name": name }),
                (None, None) => return Err("Either --name or --data is required".into()),
            };
            let response = with_spinner(
                "Creating organization...",
                cli.batch,
                client.create_org(&body),
            )
            .await?;
            output_response(&response, &cli.output)?;
        }
        OrgCommand::Update { oid, data } => {
            let body = parse_json_data(data)?;
            let response = with_spinner(
                &format!("Updating organization '{}'...", oid),
                cli.batch,
                client.update_org(oid, &body),
            )
            .await?;
            output_response(&response, &cli.output)?;
        }
        OrgCommand::Delete { oid, yes } => {
            let prompt = format!("Delete organization '{}'?", oid);
            if !confirm_action(&prompt, *yes || cli.batch)? {
                println!("Aborted.");
                return Ok(());
            }
            let response = with_spinner(
                &format!("Deleting organization '{}'...", oid),
                cli.batch,
                client.delete_org(oid),
            )
            .await?;
            report(&response, cli, &format!("Organization '{}' deleted.", oid))?;
        }
    }
    Ok(())
}

/// Run a 'member' subcommand
pub async fn run_member_command(
    client: &OrgClient,
    cli: &Cli,
    action: &MemberCommand,
) -> CommandResult {
    match action {
        MemberCommand::List {
            oid,
            page,
            page_size,
        } => {
            let params = PageParams {
                page: *page,
                page_size: *page_size,
                ..PageParams::default()
            };
            let response = with_spinner(
                &format!("Fetching members of '{}'...", oid),
                cli.batch,
                client.query_orguser_list(oid, &params),
            )
            .await?;
            output_response(&response, &cli.output)?;
        }
        MemberCommand::Get { oid, username } => {
            let response = with_spinner(
                &format!("Fetching member '{}'...", username),
                cli.batch,
                client.query_orguser(oid, username),
            )
            .await?;
            output_response(&response, &cli.output)?;
        }
        MemberCommand::Add { oid, usernames } => {
            let response = with_spinner(
                &format!("Adding {} user(s) to '{}'...", usernames.len(), oid),
                cli.batch,
                client.add_orguser(oid, usernames.iter().cloned()),
            )
            .await?;
            report(
                &response,
                cli,
                &format!("Added {} user(s) to '{}'.", usernames.len(), oid),
            )?;
        }
        MemberCommand::Remove {
            oid,
            usernames,
            yes,
        } => {
            let prompt = format!(
                "Remove {} from organization '{}'?",
                usernames.join(", "),
                oid
            );
            if !confirm_action(&prompt, *yes || cli.batch)? {
                println!("Aborted.");
                return Ok(());
            }
            let response = with_spinner(
                &format!("Removing {} user(s) from '{}'...", usernames.len(), oid),
                cli.batch,
                client.delete_orguser(oid, usernames.iter().cloned()),
            )
            .await?;
            report(
                &response,
                cli,
                &format!("Removed {} user(s) from '{}'.", usernames.len(), oid),
            )?;
        }
        MemberCommand::Update {
            oid,
            username,
            data,
        } => {
            let body = parse_json_data(data)?;
            let response = with_spinner(
                &format!("Updating member '{}'...", username),
                cli.batch,
                client.update_orguser(oid, username, &body),
            )
            .await?;
            output_response(&response, &cli.output)?;
        }
    }
    Ok(())
}

/// Run an 'invite' subcommand
pub async fn run_invite_command(
    client: &OrgClient,
    cli: &Cli,
    action: &InviteCommand,
) -> CommandResult {
    let response = match action {
        InviteCommand::Key { oid } => {
            with_spinner(
                "Fetching invitation key...",
                cli.batch,
                client.get_org_invitation_key(oid),
            )
            .await?
        }
        InviteCommand::Refresh { oid } => {
            with_spinner(
                "Refreshing invitation key...",
                cli.batch,
                client.refresh_org_invitation_key(oid),
            )
            .await?
        }
        InviteCommand::View { oid, key } => {
            with_spinner(
                "Fetching organization...",
                cli.batch,
                client.view_org_by_invitation_key(oid, key),
            )
            .await?
        }
        InviteCommand::Join { oid, key } => {
            with_spinner(
                &format!("Joining organization '{}'...", oid),
                cli.batch,
                client.join_org_by_invitation_key(oid, key),
            )
            .await?
        }
    };
    report(&response, cli, "Done.")
}

//
//  yacon
//  cli/group.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Group commands
//!
//! ```bash
//! yacon group list --fields type,name,email,members
//! yacon group members 7
//! yacon group add-member 7 --login ivanov
//! yacon group add-member 7 --id 3 --type department
//! ```

use anyhow::{bail, Result};
use clap::{ArgGroup, Args, Subcommand};

use crate::api::directory::{MemberType, MembershipRecord};

use super::{BodyArgs, GlobalOptions, ListArgs};

/// List and manage groups
#[derive(Args, Debug)]
pub struct GroupCommand {
    #[command(subcommand)]
    pub command: GroupSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum GroupSubcommand {
    /// List groups
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// List members of a group
    Members(MembersArgs),

    /// Add a user, group or department to a group
    AddMember(AddMemberArgs),

    /// Create a group
    Create(CreateArgs),

    /// Update a group
    Patch(PatchArgs),

    /// Delete a group
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct MembersArgs {
    /// Group id
    pub group_id: u64,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("member").required(true).args(["id", "login"])))]
pub struct AddMemberArgs {
    /// Group id
    pub group_id: u64,

    /// Id of the member to add
    #[arg(long)]
    pub id: Option<u64>,

    /// Kind of member given by --id [default: user]
    #[arg(long = "type", value_enum, requires = "id")]
    pub member_type: Option<MemberType>,

    /// Login of a user to add
    #[arg(long)]
    pub login: Option<String>,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[command(flatten)]
    pub body: BodyArgs,
}

#[derive(Args, Debug)]
pub struct PatchArgs {
    /// Group id
    pub group_id: u64,

    #[command(flatten)]
    pub body: BodyArgs,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Group id
    pub group_id: u64,
}

impl GroupCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.writer();

        let result = match &self.command {
            GroupSubcommand::List(args) => {
                client.list_groups(args.payload()?, args.pagination()).await?
            }
            GroupSubcommand::Members(args) => client.group_members(args.group_id).await?,
            GroupSubcommand::AddMember(args) => match (&args.login, args.id) {
                (Some(login), _) => {
                    client
                        .add_group_member_by_login(args.group_id, login)
                        .await?
                }
                (None, Some(id)) => {
                    let member = MembershipRecord::new(args.member_type.unwrap_or(MemberType::User), id);
                    client.add_group_member(args.group_id, member).await?
                }
                (None, None) => bail!("Specify the member with --id or --login"),
            },
            GroupSubcommand::Create(args) => {
                client.create_group(args.body.required_payload()?).await?
            }
            GroupSubcommand::Patch(args) => {
                client
                    .patch_group(args.group_id, args.body.required_payload()?)
                    .await?
            }
            GroupSubcommand::Delete(args) => {
                let result = client.delete_group(args.group_id).await?;
                writer.write_success(&format!("Deleted group {}", args.group_id));
                result
            }
        };

        writer.write(&result)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Result<GroupSubcommand, clap::Error> {
        let cli = Cli::try_parse_from(args)?;
        match cli.command {
            Commands::Group(cmd) => Ok(cmd.command),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_add_member_requires_id_or_login() {
        assert!(parse(&["yacon", "group", "add-member", "7"]).is_err());
        assert!(parse(&["yacon", "group", "add-member", "7", "--id", "1", "--login", "x"]).is_err());
    }

    #[test]
    fn test_add_member_by_id_with_type() {
        let cmd = parse(&["yacon", "group", "add-member", "7", "--id", "3", "--type", "department"])
            .unwrap();
        match cmd {
            GroupSubcommand::AddMember(args) => {
                assert_eq!(args.group_id, 7);
                assert_eq!(args.id, Some(3));
                assert_eq!(args.member_type, Some(MemberType::Department));
            }
            other => panic!("unexpected subcommand: {other:?}"),
        }
    }

    #[test]
    fn test_add_member_by_login_has_no_type() {
        let cmd = parse(&["yacon", "group", "add-member", "7", "--login", "ivanov"]).unwrap();
        match cmd {
            GroupSubcommand::AddMember(args) => {
                assert_eq!(args.login.as_deref(), Some("ivanov"));
                assert_eq!(args.member_type, None);
            }
            other => panic!("unexpected subcommand: {other:?}"),
        }
    }

    #[test]
    fn test_type_requires_id() {
        assert!(parse(&["yacon", "group", "add-member", "7", "--login", "x", "--type", "group"]).is_err());
    }
}

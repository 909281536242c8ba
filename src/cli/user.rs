//
//  yacon
//  cli/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User commands

use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::Value;

use super::{BodyArgs, GlobalOptions, ListArgs};

/// List and manage users
#[derive(Args, Debug)]
pub struct UserCommand {
    #[command(subcommand)]
    pub command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UserSubcommand {
    /// List users
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Print the id of the user with a login
    Id(IdArgs),

    /// Update a user
    Patch(PatchArgs),

    /// Add an alias (extra login) to a user
    Alias(AliasArgs),
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// User login (nickname)
    pub login: String,
}

#[derive(Args, Debug)]
pub struct PatchArgs {
    /// User id
    pub user_id: u64,

    #[command(flatten)]
    pub body: BodyArgs,
}

#[derive(Args, Debug)]
pub struct AliasArgs {
    /// User id
    pub user_id: u64,

    /// Alias login to add
    pub alias: String,
}

impl UserCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;

        let result = match &self.command {
            UserSubcommand::List(args) => {
                client.list_users(args.payload()?, args.pagination()).await?
            }
            UserSubcommand::Id(args) => Value::from(client.user_id_by_login(&args.login).await?),
            UserSubcommand::Patch(args) => {
                client
                    .patch_user(args.user_id, args.body.required_payload()?)
                    .await?
            }
            UserSubcommand::Alias(args) => client.set_user_alias(args.user_id, &args.alias).await?,
        };

        global.writer().write(&result)
    }
}

//
//  yacon
//  cli/department.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Department commands
//!
//! Departments can be addressed by numeric id or by label:
//!
//! ```bash
//! yacon department list --fields name,email,parents,label,description --per-page 1000
//! yacon department id it --per-page 1000
//! yacon department patch --label it -F description="Отдел информационных технологий"
//! ```

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use serde_json::Value;

use crate::api::common::{Pagination, Payload};

use super::{BodyArgs, GlobalOptions, ListArgs};

/// List and manage departments
#[derive(Args, Debug)]
pub struct DepartmentCommand {
    #[command(subcommand)]
    pub command: DepartmentSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DepartmentSubcommand {
    /// List departments
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Print the id of the department with a label
    Id(IdArgs),

    /// Update a department by id or label
    Patch(PatchArgs),

    /// Delete a department
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Department label (e.g. it)
    pub label: String,

    /// Extra fields to request alongside the label
    #[arg(long)]
    pub fields: Option<String>,

    #[command(flatten)]
    pub lookup: LookupArgs,
}

/// Paging for the department listing a label is looked up in.
#[derive(Args, Debug, Default)]
pub struct LookupArgs {
    /// Page of departments to search
    #[arg(long)]
    pub page: Option<u32>,

    /// Departments per page to search (the API default is 20)
    #[arg(long)]
    pub per_page: Option<u32>,
}

impl LookupArgs {
    /// Lookup query payload seeded with `fields`, or `None` when nothing was given.
    fn payload(&self, fields: Option<&str>) -> Option<Payload> {
        let pagination = Pagination::from_parts(self.page, self.per_page);
        if fields.is_none() && pagination.is_none() {
            return None;
        }

        let mut payload = Payload::new();
        if let Some(fields) = fields {
            payload.insert("fields".to_string(), Value::from(fields));
        }
        if let Some(pagination) = pagination {
            pagination.merge_into(&mut payload);
        }
        Some(payload)
    }
}

#[derive(Args, Debug)]
pub struct PatchArgs {
    /// Department id
    #[arg(required_unless_present = "label")]
    pub dept_id: Option<u64>,

    /// Department label, resolved to an id first
    #[arg(long, conflicts_with = "dept_id")]
    pub label: Option<String>,

    #[command(flatten)]
    pub lookup: LookupArgs,

    #[command(flatten)]
    pub body: BodyArgs,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Department id
    pub dept_id: u64,
}

impl DepartmentCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.writer();

        let result = match &self.command {
            DepartmentSubcommand::List(args) => {
                client
                    .list_departments(args.payload()?, args.pagination())
                    .await?
            }
            DepartmentSubcommand::Id(args) => {
                let lookup = args.lookup.payload(args.fields.as_deref());
                let id = client.department_id_by_label(&args.label, lookup).await?;
                Value::from(id)
            }
            DepartmentSubcommand::Patch(args) => {
                let payload = args.body.required_payload()?;
                match (&args.label, args.dept_id) {
                    (Some(label), _) => {
                        client
                            .patch_department_by_label_with(label, args.lookup.payload(None), payload)
                            .await?
                    }
                    (None, Some(id)) => client.patch_department(id, payload).await?,
                    (None, None) => bail!("Specify a department id or --label"),
                }
            }
            DepartmentSubcommand::Delete(args) => {
                let result = client.delete_department(args.dept_id).await?;
                writer.write_success(&format!("Deleted department {}", args.dept_id));
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

    fn parse(args: &[&str]) -> Result<DepartmentSubcommand, clap::Error> {
        let cli = Cli::try_parse_from(args)?;
        match cli.command {
            Commands::Department(cmd) => Ok(cmd.command),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_patch_by_label() {
        let cmd = parse(&["yacon", "dept", "patch", "--label", "it", "-F", "description=IT"]).unwrap();
        match cmd {
            DepartmentSubcommand::Patch(args) => {
                assert_eq!(args.label.as_deref(), Some("it"));
                assert_eq!(args.dept_id, None);
            }
            other => panic!("unexpected subcommand: {other:?}"),
        }
    }

    #[test]
    fn test_id_lookup_paging() {
        let cmd = parse(&["yacon", "department", "id", "it", "--per-page", "1000"]).unwrap();
        match cmd {
            DepartmentSubcommand::Id(args) => {
                let lookup = args.lookup.payload(args.fields.as_deref()).unwrap();
                assert_eq!(lookup["page"], 1);
                assert_eq!(lookup["per_page"], 1000);
                assert!(!lookup.contains_key("fields"));
            }
            other => panic!("unexpected subcommand: {other:?}"),
        }

        assert!(LookupArgs::default().payload(None).is_none());
        assert_eq!(
            LookupArgs::default().payload(Some("name")).unwrap()["fields"],
            "name"
        );
    }

    #[test]
    fn test_patch_by_label_with_paging() {
        let cmd = parse(&[
            "yacon", "dept", "patch", "--label", "it", "--per-page", "500", "-F", "description=IT",
        ])
        .unwrap();
        match cmd {
            DepartmentSubcommand::Patch(args) => {
                assert_eq!(args.lookup.per_page, Some(500));
                assert_eq!(args.body.required_payload().unwrap()["description"], "IT");
            }
            other => panic!("unexpected subcommand: {other:?}"),
        }
    }

    #[test]
    fn test_patch_needs_target() {
        assert!(parse(&["yacon", "department", "patch", "-F", "a=b"]).is_err());
        assert!(parse(&["yacon", "department", "patch", "2", "--label", "it"]).is_err());
    }
}

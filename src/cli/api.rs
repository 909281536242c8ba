//
//  yacon
//  cli/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Direct API access command
//!
//! Sends a request through the same dispatcher the named commands use, so
//! payload placement and id handling follow the verb:
//!
//! ```bash
//! # GET: fields become query parameters
//! yacon api /groups/ -F fields=name,email --per-page 100
//!
//! # PATCH: id appended to the path, fields become the JSON body
//! yacon api -X PATCH /departments/ --id 2 -F description="IT"
//!
//! # Placeholders are substituted for any verb
//! yacon api /groups/{id}/members/ --id 7
//! ```

use anyhow::Result;
use clap::Args;

use crate::api::common::Pagination;
use crate::api::{Endpoint, Method};

use super::{BodyArgs, GlobalOptions};

/// Call any Directory API endpoint
#[derive(Args, Debug)]
pub struct ApiCommand {
    /// Path relative to the API host (e.g. /users/ or /groups/{id}/members/)
    pub path: String,

    /// HTTP method (GET, POST, PATCH, DELETE)
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: String,

    /// Resource id, substituted for {id} or appended for PATCH/DELETE
    #[arg(long)]
    pub id: Option<String>,

    #[command(flatten)]
    pub body: BodyArgs,

    /// Page number, starting at 1
    #[arg(long)]
    pub page: Option<u32>,

    /// Items per page
    #[arg(long)]
    pub per_page: Option<u32>,
}

impl ApiCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let method: Method = self.method.parse()?;
        let endpoint = Endpoint::custom(&self.path, method);

        let client = global.client()?;
        let result = client
            .execute(
                &endpoint,
                self.body.payload()?,
                self.id.as_deref(),
                Pagination::from_parts(self.page, self.per_page),
            )
            .await?;

        global.writer().write(&result)
    }
}

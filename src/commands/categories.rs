//! Categories commands

use super::{CommandResult, Context};
use crate::output::CategoryRow;
use crate::CategoryCommands;
use record_forms::CategoryLookup;

pub async fn handle(action: CategoryCommands, ctx: &Context) -> CommandResult {
    match action {
        CategoryCommands::List => {
            let options = CategoryLookup::fetch_options(ctx.client.as_ref()).await;
            if options.is_empty() {
                eprintln!("No categories available");
            }
            let rows: Vec<CategoryRow> = options.into_iter().map(Into::into).collect();
            ctx.format.print(&rows);
        }
    }
    Ok(())
}

//! `!wiki <query>` — encyclopedia summary

use crate::handlers::{HandlerContext, HandlerError, Reply};

const USAGE: &str = "\u{274C} Usage: !wiki <query>";
const FAILED: &str = "\u{274C} No results found!";

pub async fn handle(ctx: &HandlerContext<'_>, args: &[String]) -> Result<Reply, HandlerError> {
    let query = args.join(" ");
    if query.is_empty() {
        return Err(HandlerError::Usage(USAGE));
    }

    let extract = ctx
        .services
        .wiki
        .summary(&query)
        .await
        .map_err(|e| HandlerError::api(FAILED, e))?;

    Ok(Reply::Text(format!(
        "\u{1F4D6} *Wikipedia: {}*\n\n{}",
        query, extract
    )))
}

//! `!ytsearch <query>` — top video search hit

use crate::handlers::{HandlerContext, HandlerError, Reply};

const USAGE: &str = "\u{274C} Usage: !ytsearch <query>";
const FAILED: &str = "\u{274C} Video search failed.";

/// Description snippet length in the reply.
const DESCRIPTION_CHARS: usize = 100;

pub async fn handle(ctx: &HandlerContext<'_>, args: &[String]) -> Result<Reply, HandlerError> {
    let query = args.join(" ");
    if query.is_empty() {
        return Err(HandlerError::Usage(USAGE));
    }

    let hit = ctx
        .services
        .video
        .search(&query)
        .await
        .map_err(|e| HandlerError::api(FAILED, e))?;

    let snippet: String = hit.description.chars().take(DESCRIPTION_CHARS).collect();
    Ok(Reply::Text(format!(
        "\u{1F3A5} *Top Result for \"{}\"*\n\n*{}*\n{}...\n\u{1F517} {}",
        query,
        hit.title,
        snippet,
        hit.watch_url()
    )))
}

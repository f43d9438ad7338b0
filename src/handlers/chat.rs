//! `!chat <prompt>` — prompt completion

use crate::handlers::{HandlerContext, HandlerError, Reply};

const USAGE: &str = "\u{274C} Usage: !chat <prompt>";
const FAILED: &str = "\u{274C} Error with the AI service.";

pub async fn handle(ctx: &HandlerContext<'_>, args: &[String]) -> Result<Reply, HandlerError> {
    let prompt = args.join(" ");
    if prompt.is_empty() {
        return Err(HandlerError::Usage(USAGE));
    }

    let answer = ctx
        .services
        .completion
        .complete(&prompt)
        .await
        .map_err(|e| HandlerError::api(FAILED, e))?;

    Ok(Reply::Text(format!(
        "\u{1F916} *AI Response:*\n\n{}",
        answer
    )))
}

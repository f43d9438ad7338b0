//! `!weather <city>` — current conditions lookup

use crate::handlers::{HandlerContext, HandlerError, Reply};

const USAGE: &str = "\u{274C} Usage: !weather <city>";
const FAILED: &str = "\u{274C} City not found!";

pub async fn handle(ctx: &HandlerContext<'_>, args: &[String]) -> Result<Reply, HandlerError> {
    let city = args.join(" ");
    if city.is_empty() {
        return Err(HandlerError::Usage(USAGE));
    }

    let report = ctx
        .services
        .weather
        .lookup(&city)
        .await
        .map_err(|e| HandlerError::api(FAILED, e))?;

    Ok(Reply::Text(format!(
        "\u{1F324} Weather in *{}*\n\u{1F321} Temp: {}\u{B0}C\n\u{1F4A7} Humidity: {}%\n\u{1F30D} Condition: {}",
        city, report.temp_c, report.humidity, report.description
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::mocks::{CountingService, CountingTranscoder, RecordingLink, services_with};
    use std::sync::Arc;

    fn ctx_pieces(weather: Arc<CountingService>) -> (crate::services::Services, RecordingLink, CountingTranscoder) {
        let services = services_with(
            Arc::new(CountingService::failing()),
            weather,
            Arc::new(CountingService::failing()),
            Arc::new(CountingService::failing()),
        );
        (services, RecordingLink::new(), CountingTranscoder::new())
    }

    #[tokio::test]
    async fn test_empty_args_usage_reply_and_zero_external_calls() {
        let weather = Arc::new(CountingService::answering("clear sky"));
        let (services, link, transcoder) = ctx_pieces(Arc::clone(&weather));
        let ctx = HandlerContext {
            services: &services,
            link: &link,
            transcoder: &transcoder,
        };

        let result = handle(&ctx, &[]).await;
        assert!(matches!(result, Err(HandlerError::Usage(USAGE))));
        assert_eq!(weather.call_count(), 0);
    }

    #[tokio::test]
    async fn test_lookup_failure_maps_to_city_not_found() {
        let weather = Arc::new(CountingService::failing());
        let (services, link, transcoder) = ctx_pieces(Arc::clone(&weather));
        let ctx = HandlerContext {
            services: &services,
            link: &link,
            transcoder: &transcoder,
        };

        let args = vec!["Atlantis".to_string()];
        let result = handle(&ctx, &args).await;
        match result {
            Err(HandlerError::Api { reply, .. }) => assert_eq!(reply, FAILED),
            other => panic!("expected api error, got {:?}", other),
        }
        assert_eq!(weather.call_count(), 1);
    }

    #[tokio::test]
    async fn test_report_is_formatted_with_city_name() {
        let weather = Arc::new(CountingService::answering("light rain"));
        let (services, link, transcoder) = ctx_pieces(Arc::clone(&weather));
        let ctx = HandlerContext {
            services: &services,
            link: &link,
            transcoder: &transcoder,
        };

        let args = vec!["San".to_string(), "Francisco".to_string()];
        let reply = handle(&ctx, &args).await.unwrap();
        match reply {
            Reply::Text(text) => {
                assert!(text.contains("San Francisco"));
                assert!(text.contains("light rain"));
            }
            other => panic!("expected text reply, got {:?}", other),
        }
    }
}

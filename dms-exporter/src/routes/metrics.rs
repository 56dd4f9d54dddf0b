use actix_web::{HttpResponse, Responder, get, web};
use dms_collector::collector::TaskStatsCollector;
use prometheus::{Encoder, TextEncoder};
use tracing::error;

/// Serves the Prometheus exposition endpoint.
///
/// Every request triggers a fresh collection cycle, so the response is a complete snapshot
/// of the control plane state at scrape time. Collection failures have already been absorbed
/// by the collector; the endpoint then answers with whatever snapshot remains, possibly
/// empty.
#[get("/metrics")]
pub async fn metrics(collector: web::Data<TaskStatsCollector>) -> impl Responder {
    let families = collector.collect().await;

    let encoder = TextEncoder::new();
    let mut body = String::new();
    if let Err(error) = encoder.encode_utf8(&families, &mut body) {
        error!(%error, "failed to encode metrics");
        return HttpResponse::InternalServerError().finish();
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(body)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use dms_collector::collector::TaskStatsCollector;
    use dms_collector::test_utils::{ScriptedDmsApi, stat, task};

    use super::metrics;

    async fn scrape(client: ScriptedDmsApi) -> (StatusCode, String) {
        let collector = TaskStatsCollector::new(Arc::new(client), "us-east-1".to_owned());
        let app = test::init_service(
            App::new()
                .service(metrics)
                .app_data(web::Data::new(collector)),
        )
        .await;

        let request = test::TestRequest::get().uri("/metrics").to_request();
        let response = test::call_service(&app, request).await;
        let status = response.status();
        let body = test::read_body(response).await;

        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[actix_web::test]
    async fn scrape_renders_task_statistics() {
        let task = task("task-1");
        let client = ScriptedDmsApi::new()
            .with_task_page(vec![task.clone()], None)
            .with_statistics_page(&task.arn, vec![stat("public", "orders", 5, 0, 2)], None);

        let (status, body) = scrape(client).await;

        assert!(status.is_success());
        assert!(body.contains("dms_task_stats"));
        assert!(body.contains(r#"action="insert""#));
        assert!(body.contains(r#"identifier="task-1""#));
        assert!(body.contains(r#"region="us-east-1""#));
    }

    #[actix_web::test]
    async fn scrape_stays_up_when_the_listing_fails() {
        let client = ScriptedDmsApi::new().with_task_error("control plane down");

        let (status, body) = scrape(client).await;

        assert!(status.is_success());
        assert!(!body.contains("identifier="));
    }
}

use actix_http::{error::PayloadError, BoxedPayloadStream, StatusCode};
use actix_web::{
    test,
    web::{self, Bytes, Data},
    FromRequest, HttpRequest,
};
use hookrelay_chat_interface::MockChatService;
use hookrelay_config::Config;
use hookrelay_core::CoreModule;
use hookrelay_crypto::Signature;
use hookrelay_events::fixtures;
use hookrelay_templates::{MockTemplateService, TemplateError};
use mockall::Sequence;
use pretty_assertions::assert_eq;

use super::gogs_event_handler;
use crate::{
    constants::{GOGS_EVENT_HEADER, GOGS_SIGNATURE_HEADER, WEBHOOK_ERROR_BODY},
    server::{build_actix_app, AppContext},
};

const SECRET: &str = "iAmAsEcReTkEy";
const WEBHOOK_PATH: &str = "/webhook/gogs";

struct TestContext {
    config: Config,
    chat_service: MockChatService,
    template_service: MockTemplateService,
}

impl TestContext {
    fn new() -> Self {
        let mut config = Config::default();
        config.gogs.webhook_secret = SECRET.into();

        Self {
            config,
            chat_service: MockChatService::new(),
            template_service: MockTemplateService::new(),
        }
    }

    fn without_traffic(mut self) -> Self {
        self.template_service.expect_render().never();
        self.chat_service.expect_send().never();
        self
    }

    fn into_app_context(self) -> Data<AppContext> {
        Data::new(AppContext::new_with_adapters(
            self.config,
            CoreModule::builder().build(),
            Box::new(self.chat_service),
            Box::new(self.template_service),
        ))
    }

    async fn call(self, req: test::TestRequest) -> (StatusCode, String) {
        let app = test::init_service(build_actix_app(self.into_app_context())).await;
        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        let body = test::read_body(resp).await;

        (status, String::from_utf8(body.to_vec()).unwrap())
    }
}

fn signed_request(event_type: &str, body: &str) -> test::TestRequest {
    let signature = Signature::compute(body.as_bytes(), SECRET).unwrap();

    test::TestRequest::post()
        .uri(WEBHOOK_PATH)
        .insert_header((GOGS_EVENT_HEADER, event_type))
        .insert_header((GOGS_SIGNATURE_HEADER, signature))
        .set_payload(body.to_string())
}

async fn broken_payload(req: &HttpRequest) -> web::Payload {
    let stream: BoxedPayloadStream = Box::pin(futures::stream::once(async {
        Err::<Bytes, _>(PayloadError::Incomplete(None))
    }));
    let mut payload = actix_http::Payload::from(stream);

    web::Payload::from_request(req, &mut payload).await.unwrap()
}

async fn call_with_broken_payload(ctx: TestContext, event_type: &str) -> StatusCode {
    let req = test::TestRequest::post()
        .uri(WEBHOOK_PATH)
        .insert_header((GOGS_EVENT_HEADER, event_type))
        .to_http_request();
    let payload = broken_payload(&req).await;

    gogs_event_handler(req, payload, ctx.into_app_context())
        .await
        .map(|resp| resp.status())
        .unwrap_or_else(|e| e.as_response_error().status_code())
}

#[actix_rt::test]
async fn unsupported_event_ignores_unreadable_payload() {
    let status = call_with_broken_payload(TestContext::new().without_traffic(), "fork").await;

    assert_eq!(status, StatusCode::OK);
}

#[actix_rt::test]
async fn supported_event_with_unreadable_payload_is_a_bad_request() {
    let status = call_with_broken_payload(TestContext::new().without_traffic(), "push").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn non_post_methods_are_not_found() {
    for req in [
        test::TestRequest::get(),
        test::TestRequest::put(),
        test::TestRequest::delete(),
    ] {
        let (status, _) = TestContext::new()
            .without_traffic()
            .call(req.uri(WEBHOOK_PATH))
            .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

#[actix_rt::test]
async fn missing_event_header_is_a_bad_request() {
    let (status, body) = TestContext::new()
        .without_traffic()
        .call(
            test::TestRequest::post()
                .uri(WEBHOOK_PATH)
                .set_payload(fixtures::PUSH_DATA),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, WEBHOOK_ERROR_BODY);
}

#[actix_rt::test]
async fn unsupported_event_is_accepted_silently() {
    let (status, body) = TestContext::new()
        .without_traffic()
        .call(
            test::TestRequest::post()
                .uri(WEBHOOK_PATH)
                .insert_header((GOGS_EVENT_HEADER, "create"))
                .set_payload("{}"),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "");
}

#[actix_rt::test]
async fn invalid_signature_is_a_bad_request() {
    let (status, body) = TestContext::new()
        .without_traffic()
        .call(
            test::TestRequest::post()
                .uri(WEBHOOK_PATH)
                .insert_header((GOGS_EVENT_HEADER, "push"))
                .insert_header((
                    GOGS_SIGNATURE_HEADER,
                    Signature::compute(b"tampered", SECRET).unwrap(),
                ))
                .set_payload(fixtures::PUSH_DATA),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, WEBHOOK_ERROR_BODY);
}

#[actix_rt::test]
async fn missing_signature_is_a_bad_request() {
    let (status, _) = TestContext::new()
        .without_traffic()
        .call(
            test::TestRequest::post()
                .uri(WEBHOOK_PATH)
                .insert_header((GOGS_EVENT_HEADER, "push"))
                .set_payload(fixtures::PUSH_DATA),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn release_is_relayed_to_the_mapped_channel_in_order() {
    let mut ctx = TestContext::new();
    ctx.config.gogs.default_channel = "#general".into();
    ctx.config
        .gogs
        .repositories
        .insert("myrepo".into(), "#releases".into());

    ctx.template_service
        .expect_render()
        .once()
        .withf(|key, payload| key == "release" && payload["release"]["tag_name"] == "v1.2.0")
        .return_once(|_, _| Ok(vec!["one".into(), "two".into()]));

    let mut seq = Sequence::new();
    for expected in ["one", "two"] {
        ctx.chat_service
            .expect_send()
            .once()
            .in_sequence(&mut seq)
            .withf(move |channel, message| channel == "#releases" && message == expected)
            .return_once(|_, _| Ok(()));
    }

    let (status, body) = ctx
        .call(signed_request("release", fixtures::RELEASE_PUBLISHED_DATA))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "");
}

#[actix_rt::test]
async fn uninteresting_pull_request_action_is_dropped() {
    let (status, _) = TestContext::new()
        .without_traffic()
        .call(signed_request(
            "pull_request",
            fixtures::PULL_REQUEST_LABEL_UPDATED_DATA,
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
}

#[actix_rt::test]
async fn render_failure_still_answers_ok() {
    let mut ctx = TestContext::new();
    ctx.config.gogs.default_channel = "#general".into();
    ctx.template_service.expect_render().once().return_once(|_, _| {
        Err(TemplateError::UnknownTemplate { key: "push".into() })
    });
    ctx.chat_service.expect_send().never();

    let (status, _) = ctx.call(signed_request("push", fixtures::PUSH_DATA)).await;

    assert_eq!(status, StatusCode::OK);
}

#[actix_rt::test]
async fn unrouted_repository_still_answers_ok() {
    let mut ctx = TestContext::new();
    ctx.template_service
        .expect_render()
        .once()
        .return_once(|_, _| Ok(vec!["message".into()]));
    ctx.chat_service.expect_send().never();

    let (status, _) = ctx.call(signed_request("push", fixtures::PUSH_DATA)).await;

    assert_eq!(status, StatusCode::OK);
}

#[actix_rt::test]
async fn empty_secret_disables_verification() {
    let mut ctx = TestContext::new();
    ctx.config.gogs.webhook_secret = String::new();
    ctx.config.gogs.default_channel = "#general".into();
    ctx.template_service
        .expect_render()
        .once()
        .return_once(|_, _| Ok(vec!["pushed".into()]));
    ctx.chat_service
        .expect_send()
        .once()
        .withf(|channel, message| channel == "#general" && message == "pushed")
        .return_once(|_, _| Ok(()));

    let (status, _) = ctx
        .call(
            test::TestRequest::post()
                .uri(WEBHOOK_PATH)
                .insert_header((GOGS_EVENT_HEADER, "push"))
                .set_payload(fixtures::PUSH_DATA),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
}

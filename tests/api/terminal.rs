use order_lookup::order_client::OrderClient;
use order_lookup::page::Document;
use order_lookup::startup::Application;
use wiremock::{Mock, MockServer, ResponseTemplate, matchers::path};

#[tokio::test]
async fn each_line_is_looked_up_and_rendered() {
    let order_server = MockServer::start().await;

    Mock::given(path("/api/v1/orders/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"order_uid": "abc123"})))
        .expect(1)
        .mount(&order_server)
        .await;
    Mock::given(path("/api/v1/orders/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .expect(1)
        .mount(&order_server)
        .await;

    let application = Application::with_document(
        Document::order_lookup_page(),
        OrderClient::new(order_server.uri()),
    )
    .unwrap();

    let input: &[u8] = b"abc123\n\nnope\n";
    let mut output = Vec::new();
    application
        .run_until_stopped(input, &mut output)
        .await
        .unwrap();

    let output = String::from_utf8(output).unwrap();
    assert_eq!(
        output,
        "Done\n{\n  \"order_uid\": \"abc123\"\n}\nEnter an Order UID\nError 404: not found\n"
    );
}

#[tokio::test]
async fn a_page_without_the_widget_elements_is_refused() {
    let mut document = Document::order_lookup_page();
    document.remove(order_lookup::page::STATUS);

    let outcome = Application::with_document(document, OrderClient::new("http://localhost".into()));

    assert!(outcome.is_err());
}

use gremlin_dsl_core::prelude::*;
use mockall::mock;

mock! {
    pub Transport {}

    impl SendHandler<String> for Transport {
        fn send(&self, traversal: &GraphTraversal, rendered: &str) -> String;
    }
}

#[test]
fn test_explicit_handler_called_exactly_once() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|traversal, rendered| traversal.render() == rendered && rendered == "g.V().count()")
        .times(1)
        .return_const("42".to_string());

    let mut traversal = g();
    traversal.v(()).count(());

    let result = traversal.dispatch(Some(&transport), &Configuration::new());

    assert_eq!(result, Ok("42".to_string()));
}

#[test]
fn test_configured_handler_called_exactly_once() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|_, rendered| rendered == "x = g.V(1)")
        .times(1)
        .return_const("v[1]".to_string());

    let config = Configuration::builder().send_handler(transport).build();

    let mut traversal = g();
    traversal.v(1).assign("x = ");

    assert_eq!(traversal.send(&config), Ok("v[1]".to_string()));
}

#[test]
fn test_missing_handler_fails() {
    let config: Configuration<String> = Configuration::default();
    let result = g().v(()).send(&config);

    assert_eq!(result, Err(GremlinError::NoSendHandler));
}

#[test]
fn test_send_with_mock() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .times(1)
        .returning(|_, rendered| format!("echo:{}", rendered));

    assert_eq!(g().e(()).label(()).send_with(&transport), "echo:g.E().label()");
}

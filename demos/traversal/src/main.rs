use gremlin_dsl_core::{
    g, Configuration, GraphTraversal, HttpTransport, HttpTransportConfig, __,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "gremlin_dsl_core=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build a traversal and preview it
    let mut friends = g();
    friends
        .v(())
        .has(("'person'", "'name'", "'marko'"))
        .out("'knows'")
        .where_(__().values("'age'").is("gt(30)"))
        .values("'name'");
    println!("Traversal:\n{}", friends);

    // Dispatch through a configured handler that only prints
    let config = Configuration::builder()
        .send_handler(|_: &GraphTraversal, query: &str| {
            println!("Would send: {}", query);
            query.len()
        })
        .build();
    let sent = g().v(()).count(()).send(&config)?;
    println!("Sent {} bytes", sent);

    // Dispatch to a real Gremlin Server (GREMLIN_ENDPOINT, default http://localhost:8182)
    let transport = HttpTransport::new(HttpTransportConfig::from_env())?;
    println!("\nSending to {}...", transport.config().endpoint);
    let server = Configuration::builder().async_send_handler(transport).build();
    match friends.send_configured_async(&server).await? {
        Ok(response) => println!("Response:\n{}", serde_json::to_string_pretty(&response)?),
        Err(err) => println!("Request failed: {}", err),
    }

    Ok(())
}
